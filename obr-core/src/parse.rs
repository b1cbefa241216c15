//! Parsing combinators for user-entered amounts and rates.
//!
//! Form fields and CSV cells arrive as free text. The strict parser is for
//! places where a bad value should stop the run (operator-supplied CLI
//! flags); the lenient parser implements the parse-or-zero contract the
//! line-item calculator is specified against.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas
/// (thousands separator).
fn normalize(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`], strictly.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Empty or
/// whitespace-only input is treated as 0. Any other unparseable input is an
/// error.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseDecimalError {
        input: s.to_string(),
        source: e,
    })
}

/// Parses a string into a [`Decimal`], coercing failures to zero.
///
/// Empty, whitespace-only, or unparseable input all yield `0`; a parse
/// failure is logged but never surfaced. This is what keeps the line-item
/// computation total over arbitrary field values.
pub fn decimal_or_zero(s: &str) -> Decimal {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "unparseable amount treated as 0: {}", e);
        Decimal::ZERO
    })
}

/// Parses a raw flag value leniently.
///
/// `true`, `yes`, and `1` (case-insensitive, trimmed) are true; everything
/// else, including empty input, is false.
pub fn flag(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "1"
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_decimal_trims_whitespace() {
        assert_eq!(parse_decimal("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        assert!(parse_decimal("abc").is_err());
    }

    #[test]
    fn decimal_or_zero_parses_valid_input() {
        assert_eq!(decimal_or_zero("837.00"), dec!(837.00));
        assert_eq!(decimal_or_zero("1,000"), dec!(1000));
    }

    #[test]
    fn decimal_or_zero_coerces_invalid_input() {
        assert_eq!(decimal_or_zero("abc"), Decimal::ZERO);
        assert_eq!(decimal_or_zero("12abc"), Decimal::ZERO);
        assert_eq!(decimal_or_zero(""), Decimal::ZERO);
    }

    #[test]
    fn decimal_or_zero_accepts_negative_amounts() {
        assert_eq!(decimal_or_zero("-45.00"), dec!(-45.00));
    }

    #[test]
    fn flag_recognizes_truthy_values() {
        assert!(flag("true"));
        assert!(flag("TRUE"));
        assert!(flag(" yes "));
        assert!(flag("1"));
    }

    #[test]
    fn flag_treats_everything_else_as_false() {
        assert!(!flag("false"));
        assert!(!flag("0"));
        assert!(!flag(""));
        assert!(!flag("maybe"));
    }
}
