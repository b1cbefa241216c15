use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use obr_core::ObligationCalculator;
use obr_core::format::format_currency;
use obr_core::parse::parse_decimal;
use obr_data::{LineItemLoader, logging};
use rust_decimal::Decimal;
use tracing::info;

/// Compute obligation request breakdowns from a CSV file of line items.
///
/// The CSV file should have the following columns:
/// - price: unit price of the line item
/// - quantity: quantity ordered
/// - tax_rate: withholding tax percentage (e.g. 5 for 5%)
/// - discount_percent: discount percentage applied to the gross amount
/// - vatable: true when the price is VAT-inclusive
/// - ewt_rate: expanded withholding tax percentage
/// - vat_rate: VAT percentage (leave empty to use the default)
///
/// Empty or malformed numeric cells are treated as 0.
#[derive(Parser, Debug)]
#[command(name = "obr-calc")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing line items
    #[arg(short, long)]
    file: PathBuf,

    /// Write the computed breakdowns to this CSV file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// VAT percentage applied to vatable rows that leave vat_rate empty
    #[arg(long)]
    default_vat_rate: Option<String>,
}

fn main() -> Result<()> {
    logging::init_default_logging();
    let args = Args::parse();

    let calculator = match &args.default_vat_rate {
        Some(raw) => {
            let rate = parse_decimal(raw)
                .with_context(|| format!("Invalid --default-vat-rate: {raw}"))?;
            ObligationCalculator::with_default_vat_rate(rate)
        }
        None => ObligationCalculator::new(),
    };

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let rows = LineItemLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;
    info!("parsed {} line items from {}", rows.len(), args.file.display());

    let breakdowns = LineItemLoader::compute_all(&calculator, &rows);
    let total: Decimal = breakdowns.iter().map(|b| b.subtotal).sum();

    match &args.output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            LineItemLoader::write_csv(&breakdowns, out)
                .with_context(|| format!("Failed to write CSV: {}", path.display()))?;
            println!(
                "Wrote {} breakdowns to {}",
                breakdowns.len(),
                path.display()
            );
            println!("Total obligation: {}", format_currency(total));
        }
        None => {
            LineItemLoader::write_csv(&breakdowns, io::stdout().lock())
                .context("Failed to write CSV to stdout")?;
            info!("total obligation: {}", format_currency(total));
        }
    }

    Ok(())
}
