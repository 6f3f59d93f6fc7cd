//! Money helpers
//!
//! Amounts are held as `Decimal` soles. Display always uses two decimals.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::validation::ValidationError;

/// Currency symbol (Peruvian sol)
pub const CURRENCY_SYMBOL: &str = "S/";

/// Round to cents, half away from zero
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as a currency string
///
/// ```
/// use shared::money::format_soles;
/// use shared::Decimal;
///
/// assert_eq!(format_soles(Decimal::new(125, 1)), "S/ 12.50");
/// ```
pub fn format_soles(amount: Decimal) -> String {
    let rounded = round_cents(amount);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{} {:.2}", CURRENCY_SYMBOL, rounded.abs())
    } else {
        format!("{} {:.2}", CURRENCY_SYMBOL, rounded.abs())
    }
}

/// Parse an amount typed by an operator
///
/// Accepts an optional `S/` prefix and a comma as decimal separator.
pub fn parse_amount(field: &str, input: &str) -> Result<Decimal, ValidationError> {
    let cleaned = input
        .trim()
        .trim_start_matches(CURRENCY_SYMBOL)
        .trim()
        .replace(',', ".");
    if cleaned.is_empty() {
        return Err(ValidationError::required(field));
    }
    Decimal::from_str(&cleaned)
        .map_err(|_| ValidationError::invalid(field, format!("'{}' is not a number", input.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_soles() {
        assert_eq!(format_soles(Decimal::new(1250, 2)), "S/ 12.50");
        assert_eq!(format_soles(Decimal::new(100, 0)), "S/ 100.00");
        assert_eq!(format_soles(Decimal::new(1, 2)), "S/ 0.01");
        assert_eq!(format_soles(Decimal::new(-35, 1)), "-S/ 3.50");
        assert_eq!(format_soles(Decimal::ZERO), "S/ 0.00");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_soles(Decimal::new(12345, 3)), "S/ 12.35");
        assert_eq!(format_soles(Decimal::new(-5, 3)), "-S/ 0.01");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("monto", "12.5").unwrap(), Decimal::new(125, 1));
        assert_eq!(parse_amount("monto", "S/ 12,50").unwrap(), Decimal::new(1250, 2));
        assert!(parse_amount("monto", "  ").is_err());
        assert!(parse_amount("monto", "doce").is_err());
    }
}
