//! Monetary amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of money in a given currency.
///
/// `amount` is in the currency's smallest denomination (cents for USD), as
/// Square reports it. It is a [`Decimal`], so arithmetic never drifts.
///
/// # Example
///
/// ```rust
/// use square_api::rest::Money;
/// use rust_decimal::Decimal;
///
/// let money: Money = serde_json::from_str(r#"{"currency_code":"USD","amount":1250}"#).unwrap();
/// assert_eq!(money.amount, Decimal::new(1250, 0));
/// assert_eq!(money.to_string(), "1250 USD");
/// ```
///
/// The default is an amount of zero with no currency, which is what Square
/// omits from sparse payment records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Money {
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// The amount, in the smallest currency unit. Decoded from the number's
    /// exact text or from a string, never through a float.
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")]
    pub amount: Decimal,
}

impl Money {
    /// Creates a money value.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currency_code: currency_code.into(),
            amount,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_integer_and_negative_amounts() {
        let refund: Money =
            serde_json::from_str(r#"{"currency_code":"USD","amount":-500}"#).unwrap();
        assert_eq!(refund.amount, Decimal::new(-500, 0));
        assert_eq!(refund.currency_code, "USD");
    }

    #[test]
    fn test_decodes_fractional_amount_exactly() {
        let money: Money = serde_json::from_str(r#"{"currency_code":"EUR","amount":"0.10"}"#).unwrap();
        assert_eq!(money.amount, Decimal::new(10, 2));
    }

    #[test]
    fn test_decodes_large_integer_exactly() {
        let money: Money =
            serde_json::from_str(r#"{"currency_code":"JPY","amount":12345678901234567891}"#).unwrap();
        assert_eq!(
            money.amount,
            Decimal::from_str_exact("12345678901234567891").unwrap()
        );
    }

    #[test]
    fn test_decodes_fractional_number_without_float_rounding() {
        let money: Money =
            serde_json::from_str(r#"{"currency_code":"USD","amount":1.00000000000000001}"#).unwrap();
        assert_eq!(
            money.amount,
            Decimal::from_str_exact("1.00000000000000001").unwrap()
        );
        assert_ne!(money.amount, Decimal::ONE);
    }

    #[test]
    fn test_rejects_non_numeric_amount() {
        let result = serde_json::from_str::<Money>(r#"{"currency_code":"USD","amount":"ten"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_sums_without_drift() {
        let a = Money::new("USD", Decimal::new(1, 1));
        let b = Money::new("USD", Decimal::new(2, 1));
        assert_eq!(a.amount + b.amount, Decimal::new(3, 1));
    }

    #[test]
    fn test_round_trip() {
        let original = Money::new("CAD", Decimal::new(129_99, 0));
        let json = serde_json::to_string(&original).unwrap();
        let decoded: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, original);
    }
}
