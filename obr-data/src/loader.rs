//! CSV loader for obligation request line items.
//!
//! ## CSV Format
//!
//! The expected CSV format uses the following columns. Column order does
//! **not** matter (headers are matched by name), but all seven headers must
//! be present. Every cell is read as raw text; empty or malformed numeric
//! cells coerce to 0 when the breakdown is computed, and an empty `vat_rate`
//! cell means "use the default".
//!
//! | Column             | Type    | Notes                                   |
//! |--------------------|---------|-----------------------------------------|
//! | `price`            | decimal | Unit price                              |
//! | `quantity`         | decimal |                                         |
//! | `tax_rate`         | decimal | Withholding percentage, `5` = 5%        |
//! | `discount_percent` | decimal | Discount percentage on the gross        |
//! | `vatable`          | flag    | `true`/`yes`/`1`; anything else is false|
//! | `ewt_rate`         | decimal | EWT percentage                          |
//! | `vat_rate`         | decimal | Empty cell = default VAT rate           |
//!
//! ### Example
//!
//! ```csv
//! price,quantity,tax_rate,discount_percent,vatable,ewt_rate,vat_rate
//! 1000,1,5,10,false,2,
//! 112,1,0,0,true,0,12
//! ```

use std::io::{Read, Write};

use obr_core::{LineItemBreakdown, LineItemInput, ObligationCalculator, RawLineItem};
use thiserror::Error;

/// Columns the line-item CSV must carry.
const REQUIRED_COLUMNS: [&str; 7] = [
    "price",
    "quantity",
    "tax_rate",
    "discount_percent",
    "vatable",
    "ewt_rate",
    "vat_rate",
];

/// Errors that can occur when reading or writing line-item CSV data.
#[derive(Debug, Error)]
pub enum LineItemCsvError {
    /// The underlying CSV parse failed (bad structure, ragged rows, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The header row does not name a required column.
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// Writing the output stream failed.
    #[error("CSV write error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loader for obligation request line items.
///
/// Reads raw rows from CSV, runs the calculator over them, and writes the
/// computed breakdowns back out as CSV.
pub struct LineItemLoader;

impl LineItemLoader {
    /// Parses line-item records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a byte slice. Cells are trimmed; the column count is strict.
    ///
    /// # Errors
    ///
    /// Returns [`LineItemCsvError`] if the header row is missing a required
    /// column or the CSV is structurally invalid.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<RawLineItem>, LineItemCsvError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LineItemCsvError::MissingColumn(column));
            }
        }

        let mut rows = Vec::new();
        for result in csv_reader.deserialize() {
            let row: RawLineItem = result?;
            rows.push(row);
        }

        Ok(rows)
    }

    /// Computes the breakdown for every raw row.
    ///
    /// Infallible past parsing: raw cells coerce per the parse-or-zero
    /// rules, so every row produces a breakdown.
    pub fn compute_all(
        calculator: &ObligationCalculator,
        rows: &[RawLineItem],
    ) -> Vec<LineItemBreakdown> {
        rows.iter()
            .map(|raw| calculator.calculate(&LineItemInput::from_raw(raw)))
            .collect()
    }

    /// Serializes breakdowns as CSV to the given writer.
    pub fn write_csv<W: Write>(
        breakdowns: &[LineItemBreakdown],
        writer: W,
    ) -> Result<(), LineItemCsvError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for breakdown in breakdowns {
            csv_writer.serialize(breakdown)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
