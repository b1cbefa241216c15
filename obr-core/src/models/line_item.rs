use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::parse;

/// Typed input for one obligation request line item.
///
/// Rate fields are percentages (`5` means 5%). `vat_rate` is `None` when the
/// caller did not supply one; the calculator then applies its default (the
/// statutory 12%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Unit price of the line item.
    pub price: Decimal,

    /// Quantity ordered.
    pub quantity: Decimal,

    /// Withholding tax percentage applied to the tax base.
    pub tax_rate: Decimal,

    /// Discount percentage applied to the gross amount.
    pub discount_percent: Decimal,

    /// Whether the price is VAT-inclusive. When true, VAT is extracted from
    /// the discounted net.
    pub vatable: bool,

    /// Expanded withholding tax percentage applied to the tax base.
    pub ewt_rate: Decimal,

    /// VAT percentage for vatable lines. `None` means "not supplied".
    pub vat_rate: Option<Decimal>,
}

impl Default for LineItemInput {
    fn default() -> Self {
        Self {
            price: Decimal::ZERO,
            quantity: Decimal::ZERO,
            tax_rate: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            vatable: false,
            ewt_rate: Decimal::ZERO,
            vat_rate: None,
        }
    }
}

impl LineItemInput {
    /// Builds a typed input from raw field values.
    ///
    /// Every numeric field follows parse-or-zero semantics: empty or
    /// unparseable text coerces to zero rather than failing, so the
    /// downstream computation is total over any form or CSV payload. An
    /// empty `vat_rate` is "not supplied" and leaves the calculator's
    /// default in effect.
    pub fn from_raw(raw: &RawLineItem) -> Self {
        let vat_rate = if raw.vat_rate.trim().is_empty() {
            None
        } else {
            Some(parse::decimal_or_zero(&raw.vat_rate))
        };

        Self {
            price: parse::decimal_or_zero(&raw.price),
            quantity: parse::decimal_or_zero(&raw.quantity),
            tax_rate: parse::decimal_or_zero(&raw.tax_rate),
            discount_percent: parse::decimal_or_zero(&raw.discount_percent),
            vatable: parse::flag(&raw.vatable),
            ewt_rate: parse::decimal_or_zero(&raw.ewt_rate),
            vat_rate,
        }
    }
}

/// One line item as delivered by a form or CSV row: raw, possibly-malformed
/// text in every field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLineItem {
    #[serde(default)]
    pub price: String,

    #[serde(default)]
    pub quantity: String,

    #[serde(default)]
    pub tax_rate: String,

    #[serde(default)]
    pub discount_percent: String,

    #[serde(default)]
    pub vatable: String,

    #[serde(default)]
    pub ewt_rate: String,

    #[serde(default)]
    pub vat_rate: String,
}
