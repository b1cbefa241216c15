//! Shared numeric helpers for obligation calculations.
//!
//! Every currency figure in an obligation request is rounded to two decimal
//! places at the step that produces it, not once at the end. The helpers in
//! this module are that single rounding primitive plus the percent-to-fraction
//! conversion used by the discount and withholding steps.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places, half away from zero.
///
/// This is standard fixed-point currency rounding: values at exactly 0.005
/// move away from zero, for negative amounts as well as positive ones. The
/// result always carries a scale of two, so serialized figures read
/// `100.00`, never `100.0`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use obr_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(8.104)), dec!(8.10));
/// assert_eq!(round_half_up(dec!(8.105)), dec!(8.11));
/// assert_eq!(round_half_up(dec!(-8.105)), dec!(-8.11)); // away from zero
/// assert_eq!(round_half_up(dec!(100)).to_string(), "100.00");
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Converts a percentage (e.g. `12` for 12%) into a fraction.
pub fn percent(rate: Decimal) -> Decimal {
    rate / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(45.004));

        assert_eq!(result, dec!(45.00));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(45.005));

        assert_eq!(result, dec!(45.01));
    }

    #[test]
    fn round_half_up_rounds_negative_values_away_from_zero() {
        let result = round_half_up(dec!(-45.005));

        assert_eq!(result, dec!(-45.01));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(837.00));

        assert_eq!(result, dec!(837.00));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn round_half_up_handles_large_values() {
        let result = round_half_up(dec!(99999999.999));

        assert_eq!(result, dec!(100000000.00));
    }

    // =========================================================================
    // percent tests
    // =========================================================================

    #[test]
    fn percent_converts_rate_to_fraction() {
        assert_eq!(percent(dec!(12)), dec!(0.12));
        assert_eq!(percent(dec!(5)), dec!(0.05));
    }

    #[test]
    fn percent_handles_zero_and_fractional_rates() {
        assert_eq!(percent(dec!(0)), dec!(0));
        assert_eq!(percent(dec!(2.5)), dec!(0.025));
    }
}
