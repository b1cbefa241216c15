use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Computed breakdown for one obligation request line item.
///
/// All currency fields are rounded to two decimal places at the step that
/// produced them. The value is transient: it carries no identity and is
/// recomputed from the input on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemBreakdown {
    /// Gross amount, price × quantity, before any discount. Unrounded.
    pub subtotal_before_discount: Decimal,

    /// Discount taken off the gross amount.
    pub discount: Decimal,

    /// VAT share of the line. Zero when the line is not vatable; otherwise
    /// extracted from the VAT-inclusive net.
    pub vat: Decimal,

    /// Net amount with VAT included.
    pub subtotal_tax_included: Decimal,

    /// Net amount with VAT excluded. This is the tax base the withholding
    /// percentages apply to.
    pub subtotal_tax_excluded: Decimal,

    /// Withholding tax on the tax base. Negative: a deduction from the
    /// payable amount.
    pub withheld: Decimal,

    /// Expanded withholding tax on the tax base. Negative, like `withheld`.
    pub ewt: Decimal,

    /// The EWT percentage the computation used, passed through for display.
    pub ewt_rate: Decimal,

    /// Sum of both withholding deductions.
    pub total_deduction: Decimal,

    /// Final obligable amount: net before tax plus the (negative) total
    /// deduction. For vatable lines the VAT remains folded in.
    pub subtotal: Decimal,
}
