//! Currencies and price labels.
//!
//! Card prices are displayed exactly as the data source sent them: the
//! currency symbol followed by the number, with no thousands separators and
//! no rounding. Amounts therefore stay `f64` here instead of being converted
//! to minor units.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::CommerceError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    CHF,
    CNY,
    #[default]
    INR,
    MXN,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::CHF => "CHF",
            Currency::CNY => "CNY",
            Currency::INR => "INR",
            Currency::MXN => "MXN",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
            Currency::CHF => "CHF",
            Currency::CNY => "\u{00a5}",
            Currency::INR => "\u{20b9}",
            Currency::MXN => "MX$",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "CHF" => Some(Currency::CHF),
            "CNY" => Some(Currency::CNY),
            "INR" => Some(Currency::INR),
            "MXN" => Some(Currency::MXN),
            _ => None,
        }
    }

    /// Parse a currency code, failing with a commerce error.
    pub fn parse(code: &str) -> Result<Self, CommerceError> {
        Self::from_code(code).ok_or_else(|| CommerceError::UnknownCurrency(code.to_string()))
    }

    /// Format a price label (e.g. "₹800").
    pub fn label(&self, amount: f64) -> String {
        format!("{}{}", self.symbol(), format_number(amount))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Render a number the way it was given: `800.0` as "800", `49.5` as "49.5".
///
/// Negative zero prints as "0".
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_keeps_input_precision() {
        assert_eq!(Currency::INR.label(800.0), "\u{20b9}800");
        assert_eq!(Currency::INR.label(1000.0), "\u{20b9}1000");
        assert_eq!(Currency::INR.label(49.99), "\u{20b9}49.99");
        assert_eq!(Currency::USD.label(12345.5), "$12345.5");
    }

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_default_currency_is_rupee() {
        assert_eq!(Currency::default().symbol(), "\u{20b9}");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("INVALID"), None);
        assert!(matches!(
            Currency::parse("XXX"),
            Err(CommerceError::UnknownCurrency(_))
        ));
    }
}
