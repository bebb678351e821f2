//! Numeric coercion helpers
//!
//! Every numeric field entered by the user goes through [`parse_or_zero`], and
//! every numeric field read back from the store goes through
//! [`deserialize_amount`]. Neither ever fails: anything that is not a finite
//! number becomes `0.0`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse the longest numeric prefix of `input`, or return `0.0`
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction and an optional exponent. Trailing garbage is ignored, so
/// `"12abc"` is `12.0` while `"abc"` is `0.0`.
///
/// # Examples
/// ```
/// use monthly_budget::models::amount::parse_or_zero;
/// assert_eq!(parse_or_zero("12.5"), 12.5);
/// assert_eq!(parse_or_zero("12abc"), 12.0);
/// assert_eq!(parse_or_zero("abc"), 0.0);
/// ```
pub fn parse_or_zero(input: &str) -> f64 {
    let s = input.trim_start();
    let end = numeric_prefix_len(s);
    if end == 0 {
        return 0.0;
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Coerce a whole string to a number, or `0.0` if any part of it is not numeric
///
/// Used for stored values, where a partially numeric string is treated as
/// garbage rather than truncated.
pub fn strict_or_zero(input: &str) -> f64 {
    let s = input.trim();
    if s.is_empty() {
        return 0.0;
    }
    if numeric_prefix_len(s) != s.len() {
        return 0.0;
    }
    finite_or_zero(s.parse::<f64>().unwrap_or(0.0))
}

/// Replace NaN and infinities with zero
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Coerce an arbitrary JSON value to an amount
pub fn coerce_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().map(finite_or_zero).unwrap_or(0.0),
        Value::String(s) => strict_or_zero(s),
        _ => 0.0,
    }
}

/// Serde helper: deserialize any value as an amount, never failing on content
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_value).unwrap_or(0.0))
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits + (j - frac_start) > 0 {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_or_zero("42"), 42.0);
        assert_eq!(parse_or_zero("12.5"), 12.5);
        assert_eq!(parse_or_zero("-7"), -7.0);
        assert_eq!(parse_or_zero("+3"), 3.0);
        assert_eq!(parse_or_zero(".5"), 0.5);
        assert_eq!(parse_or_zero("5."), 5.0);
        assert_eq!(parse_or_zero("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_prefix_and_garbage() {
        assert_eq!(parse_or_zero("  120 "), 120.0);
        assert_eq!(parse_or_zero("12abc"), 12.0);
        assert_eq!(parse_or_zero("1e"), 1.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("-"), 0.0);
        assert_eq!(parse_or_zero("."), 0.0);
        assert_eq!(parse_or_zero("£12"), 0.0);
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert_eq!(parse_or_zero("1e999"), 0.0);
        assert_eq!(parse_or_zero("inf"), 0.0);
        assert_eq!(parse_or_zero("NaN"), 0.0);
    }

    #[test]
    fn test_strict_rejects_trailing_garbage() {
        assert_eq!(strict_or_zero("12"), 12.0);
        assert_eq!(strict_or_zero(" 12.5 "), 12.5);
        assert_eq!(strict_or_zero("12abc"), 0.0);
        assert_eq!(strict_or_zero(""), 0.0);
    }

    #[test]
    fn test_coerce_value() {
        assert_eq!(coerce_value(&json!(150)), 150.0);
        assert_eq!(coerce_value(&json!(2.5)), 2.5);
        assert_eq!(coerce_value(&json!("300")), 300.0);
        assert_eq!(coerce_value(&json!("abc")), 0.0);
        assert_eq!(coerce_value(&json!(null)), 0.0);
        assert_eq!(coerce_value(&json!(true)), 0.0);
        assert_eq!(coerce_value(&json!([1, 2])), 0.0);
    }

    #[test]
    fn test_deserialize_amount_field() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "deserialize_amount")]
            value: f64,
        }

        let row: Row = serde_json::from_str(r#"{"value": "abc"}"#).unwrap();
        assert_eq!(row.value, 0.0);
        let row: Row = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(row.value, 0.0);
        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(row.value, 0.0);
        let row: Row = serde_json::from_str(r#"{"value": 99.5}"#).unwrap();
        assert_eq!(row.value, 99.5);
    }
}
