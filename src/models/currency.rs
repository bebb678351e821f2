//! Currency selection and amount formatting
//!
//! Amounts are plain `f64` values; formatting rounds to whole units and groups
//! thousands, e.g. `£1,480` or `-$20`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    #[default]
    Pound,
    Dollar,
    Euro,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Pound, Currency::Dollar, Currency::Euro];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Pound => "£",
            Self::Dollar => "$",
            Self::Euro => "€",
        }
    }

    pub fn iso_code(&self) -> &'static str {
        match self {
            Self::Pound => "GBP",
            Self::Dollar => "USD",
            Self::Euro => "EUR",
        }
    }

    /// Exact match on one of the three symbols
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.symbol() == symbol)
    }

    /// `£` is GBP, `$` is USD, anything else is EUR
    pub fn from_symbol_lossy(symbol: &str) -> Self {
        match symbol {
            "£" => Self::Pound,
            "$" => Self::Dollar,
            _ => Self::Euro,
        }
    }

    /// Parse user input: a symbol or an ISO code (case-insensitive)
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::from_symbol(input).or_else(|| {
            Self::ALL
                .into_iter()
                .find(|c| c.iso_code().eq_ignore_ascii_case(input))
        })
    }

    /// The next currency in the selector, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Pound => Self::Dollar,
            Self::Dollar => Self::Euro,
            Self::Euro => Self::Pound,
        }
    }

    /// Format an amount with zero decimal places
    pub fn format(&self, amount: f64) -> String {
        let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
        let negative = rounded < 0.0;
        let whole = group_thousands(rounded.abs() as u64);

        if negative {
            format!("-{}{}", self.symbol(), whole)
        } else {
            format!("{}{}", self.symbol(), whole)
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        Ok(Self::from_symbol_lossy(&symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_codes() {
        assert_eq!(Currency::from_symbol_lossy("£").iso_code(), "GBP");
        assert_eq!(Currency::from_symbol_lossy("$").iso_code(), "USD");
        assert_eq!(Currency::from_symbol_lossy("€").iso_code(), "EUR");
        assert_eq!(Currency::from_symbol_lossy("¥").iso_code(), "EUR");
    }

    #[test]
    fn test_parse_user_input() {
        assert_eq!(Currency::parse("$"), Some(Currency::Dollar));
        assert_eq!(Currency::parse("gbp"), Some(Currency::Pound));
        assert_eq!(Currency::parse(" EUR "), Some(Currency::Euro));
        assert_eq!(Currency::parse("¥"), None);
    }

    #[test]
    fn test_format_whole_units() {
        assert_eq!(Currency::Pound.format(1480.0), "£1,480");
        assert_eq!(Currency::Dollar.format(3000.0), "$3,000");
        assert_eq!(Currency::Euro.format(0.0), "€0");
        assert_eq!(Currency::Pound.format(999.0), "£999");
        assert_eq!(Currency::Pound.format(1234567.0), "£1,234,567");
    }

    #[test]
    fn test_format_rounding_and_sign() {
        assert_eq!(Currency::Pound.format(-20.0), "-£20");
        assert_eq!(Currency::Pound.format(12.5), "£13");
        assert_eq!(Currency::Pound.format(-12.5), "-£13");
        assert_eq!(Currency::Pound.format(-0.4), "£0");
        assert_eq!(Currency::Pound.format(f64::NAN), "£0");
    }

    #[test]
    fn test_cycle() {
        let mut c = Currency::Pound;
        for _ in 0..3 {
            c = c.next();
        }
        assert_eq!(c, Currency::Pound);
    }

    #[test]
    fn test_serde_as_symbol() {
        assert_eq!(serde_json::to_string(&Currency::Euro).unwrap(), r#""€""#);
        let c: Currency = serde_json::from_str(r#""$""#).unwrap();
        assert_eq!(c, Currency::Dollar);
    }
}
