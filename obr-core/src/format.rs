//! Display formatting for currency amounts.
//!
//! Report and summary output renders amounts with comma grouping and two
//! fixed decimals; a missing amount renders as an em dash.

use num_format::{Locale, ToFormattedString};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calculations::common::round_half_up;

/// Formats an amount with comma thousands separators and two fixed decimals.
///
/// Rounding is half away from zero, the same rule every computation step
/// uses. Negative amounts keep a leading minus.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use obr_core::format::format_currency;
///
/// assert_eq!(format_currency(dec!(1234567.891)), "1,234,567.89");
/// assert_eq!(format_currency(dec!(-45)), "-45.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();

    let whole = abs.trunc().to_u128().unwrap_or(0);
    let cents = (abs.fract() * Decimal::ONE_HUNDRED).to_u32().unwrap_or(0);
    let grouped = whole.to_formatted_string(&Locale::en);

    if negative {
        format!("-{grouped}.{cents:02}")
    } else {
        format!("{grouped}.{cents:02}")
    }
}

/// Formats an optional amount, rendering `None` as an em dash.
pub fn format_currency_opt(amount: Option<Decimal>) -> String {
    amount.map_or_else(|| "—".to_string(), format_currency)
}

/// Formats an amount with comma thousands separators and no decimals.
///
/// The fraction is rounded half away from zero, not truncated.
pub fn format_whole(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let whole = rounded.abs().to_u128().unwrap_or(0);
    let grouped = whole.to_formatted_string(&Locale::en);

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(1234567.891)), "1,234,567.89");
    }

    #[test]
    fn format_currency_pads_cents() {
        assert_eq!(format_currency(dec!(837)), "837.00");
        assert_eq!(format_currency(dec!(0.5)), "0.50");
    }

    #[test]
    fn format_currency_keeps_negative_sign() {
        assert_eq!(format_currency(dec!(-63)), "-63.00");
        assert_eq!(format_currency(dec!(-1234.5)), "-1,234.50");
    }

    #[test]
    fn format_currency_never_renders_negative_zero() {
        assert_eq!(format_currency(dec!(-0.001)), "0.00");
    }

    #[test]
    fn format_currency_opt_renders_em_dash_for_none() {
        assert_eq!(format_currency_opt(None), "—");
        assert_eq!(format_currency_opt(Some(dec!(200))), "200.00");
    }

    #[test]
    fn format_whole_rounds_half_away_from_zero() {
        assert_eq!(format_whole(dec!(1234.5)), "1,235");
        assert_eq!(format_whole(dec!(-1234.5)), "-1,235");
    }

    #[test]
    fn format_whole_drops_decimals() {
        assert_eq!(format_whole(dec!(1000000.49)), "1,000,000");
    }
}
