//! Obligation request line-item computation.
//!
//! This module implements the per-line computation used when preparing an
//! obligation request (OBR): from a unit price, a quantity, and the line's
//! tax treatment it derives the discount, the VAT share, the withholding
//! deductions, and the final obligable amount.
//!
//! # Computation steps
//!
//! | Step | Description |
//! |------|--------------------------------------------------------------|
//! | 1    | Gross amount: price × quantity (unrounded)                   |
//! | 2    | Discount: gross × discount rate, rounded                     |
//! | 3    | Net before tax: gross − discount (unrounded subtraction)     |
//! | 4    | VAT: extracted from the net when the line is vatable         |
//! | 5    | Tax base: net minus extracted VAT (or the net itself)        |
//! | 6    | Withheld: tax base × tax rate, rounded, then negated         |
//! | 7    | EWT: tax base × EWT rate, rounded, then negated              |
//! | 8    | Total deduction: withheld + EWT, rounded                     |
//! | 9    | Subtotal: net before tax + total deduction, rounded          |
//!
//! A vatable price is VAT-inclusive (standard Philippine practice for OBR
//! line items), so step 4 uses the extraction formula
//! `net × rate / (100 + rate)` rather than adding VAT on top. The final
//! subtotal keeps the VAT folded in for vatable lines because step 9 starts
//! from the net before tax, not from the tax base.
//!
//! Every step that the table marks as rounded applies two-decimal
//! half-away-from-zero rounding at that step. Compounding the per-step
//! roundings is deliberate; rounding only the end result gives different
//! figures.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use obr_core::{LineItemInput, ObligationCalculator};
//!
//! let calculator = ObligationCalculator::new();
//! let breakdown = calculator.calculate(&LineItemInput {
//!     price: dec!(1000.00),
//!     quantity: dec!(1),
//!     tax_rate: dec!(5),
//!     discount_percent: dec!(10),
//!     vatable: false,
//!     ewt_rate: dec!(2),
//!     vat_rate: None,
//! });
//!
//! assert_eq!(breakdown.discount, dec!(100.00));
//! assert_eq!(breakdown.withheld, dec!(-45.00));
//! assert_eq!(breakdown.ewt, dec!(-18.00));
//! assert_eq!(breakdown.subtotal, dec!(837.00));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{percent, round_half_up};
use crate::models::{LineItemBreakdown, LineItemInput};

/// Calculator for obligation request line items.
///
/// Holds the VAT rate applied to vatable lines that do not carry their own
/// rate. The computation itself is pure: [`calculate`](Self::calculate) is
/// total over any input and never fails.
#[derive(Debug, Clone)]
pub struct ObligationCalculator {
    default_vat_rate: Decimal,
}

impl Default for ObligationCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ObligationCalculator {
    /// Creates a calculator with the statutory 12% default VAT rate.
    pub fn new() -> Self {
        Self {
            default_vat_rate: Decimal::new(12, 0),
        }
    }

    /// Creates a calculator with a non-standard default VAT rate.
    pub fn with_default_vat_rate(default_vat_rate: Decimal) -> Self {
        Self { default_vat_rate }
    }

    /// Computes the full breakdown for one line item.
    ///
    /// All rate fields are percentages (`5` means 5%). A `vat_rate` of
    /// `None` uses the calculator's default. Withholding amounts come back
    /// negative; they are deductions from the payable amount.
    pub fn calculate(
        &self,
        input: &LineItemInput,
    ) -> LineItemBreakdown {
        let gross_amount = self.gross_amount(input.price, input.quantity);
        let discount = self.discount(gross_amount, input.discount_percent);
        let net_before_tax = gross_amount - discount;

        let vat_rate = input.vat_rate.unwrap_or(self.default_vat_rate);
        let (vat, tax_base) = self.vat_and_tax_base(net_before_tax, input.vatable, vat_rate);

        let withheld = self.withholding(tax_base, input.tax_rate);
        let ewt = self.withholding(tax_base, input.ewt_rate);
        let total_deduction = round_half_up(withheld + ewt);

        let subtotal = round_half_up(net_before_tax + total_deduction);
        let subtotal_tax_included = if input.vatable {
            net_before_tax
        } else {
            round_half_up(net_before_tax + vat)
        };

        LineItemBreakdown {
            subtotal_before_discount: gross_amount,
            discount,
            vat,
            subtotal_tax_included,
            subtotal_tax_excluded: tax_base,
            withheld,
            ewt,
            ewt_rate: input.ewt_rate,
            total_deduction,
            subtotal,
        }
    }

    /// Gross line amount, price × quantity. Never rounded.
    fn gross_amount(
        &self,
        price: Decimal,
        quantity: Decimal,
    ) -> Decimal {
        price * quantity
    }

    /// Discount amount on the gross.
    fn discount(
        &self,
        gross_amount: Decimal,
        discount_percent: Decimal,
    ) -> Decimal {
        round_half_up(gross_amount * percent(discount_percent))
    }

    /// VAT share and tax base for the line.
    ///
    /// Vatable lines treat the net as VAT-inclusive and extract the VAT;
    /// non-vatable lines carry no VAT and use the unrounded net as the base.
    fn vat_and_tax_base(
        &self,
        net_before_tax: Decimal,
        vatable: bool,
        vat_rate: Decimal,
    ) -> (Decimal, Decimal) {
        if !vatable {
            return (Decimal::ZERO, net_before_tax);
        }

        let divisor = Decimal::ONE_HUNDRED + vat_rate;
        if divisor.is_zero() {
            // a -100% rate would zero the extraction divisor
            warn!(%vat_rate, "VAT extraction divisor is zero, treating VAT as 0");
            return (Decimal::ZERO, round_half_up(net_before_tax));
        }

        let vat = round_half_up(net_before_tax * vat_rate / divisor);
        let tax_base = round_half_up(net_before_tax - vat);
        (vat, tax_base)
    }

    /// Withholding on the tax base: rounded on the positive magnitude, then
    /// negated.
    fn withholding(
        &self,
        tax_base: Decimal,
        rate: Decimal,
    ) -> Decimal {
        let amount = round_half_up(tax_base * percent(rate));
        if amount.is_zero() {
            // a zero deduction must not carry a negative sign
            Decimal::ZERO
        } else {
            -amount
        }
    }
}
