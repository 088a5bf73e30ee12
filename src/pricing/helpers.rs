//! Lenient numeric input handling
//!
//! Quantities and point amounts arrive straight from form fields, so a
//! cleared or garbled field must read as 0 rather than fail the request.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads an integer the way a form field would: JSON integers as-is,
/// finite floats truncated toward zero, and strings by their leading
/// (optionally signed) digits. Anything else is 0.
pub fn parse_lenient_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.as_u64().is_some() {
                i64::MAX
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
                    .unwrap_or(0)
            }
        }
        Value::String(s) => parse_int_prefix(s),
        _ => 0,
    }
}

fn parse_int_prefix(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude = digits[..end].parse::<i64>().unwrap_or(match end {
        0 => 0,
        _ => i64::MAX,
    });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Quantity from raw input; negatives clamp to 0.
pub fn coerce_quantity(value: &Value) -> u64 {
    parse_lenient_int(value).max(0) as u64
}

/// Requested point amount from raw input, still signed so the calculator
/// can apply its own sanitizing.
pub fn coerce_points(value: &Value) -> i64 {
    parse_lenient_int(value)
}

/// `deserialize_with` adapter for point fields that may hold any JSON value.
pub fn deserialize_points<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().map(coerce_points).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(parse_lenient_int(&json!(42)), 42);
        assert_eq!(parse_lenient_int(&json!(-7)), -7);
        assert_eq!(parse_lenient_int(&json!(3.9)), 3);
    }

    #[test]
    fn test_strings_parse_leading_digits() {
        assert_eq!(parse_lenient_int(&json!("2000")), 2000);
        assert_eq!(parse_lenient_int(&json!("  12abc")), 12);
        assert_eq!(parse_lenient_int(&json!("-5")), -5);
        assert_eq!(parse_lenient_int(&json!("")), 0);
        assert_eq!(parse_lenient_int(&json!("abc")), 0);
        assert_eq!(parse_lenient_int(&json!("-")), 0);
    }

    #[test]
    fn test_non_numeric_values_are_zero() {
        assert_eq!(parse_lenient_int(&Value::Null), 0);
        assert_eq!(parse_lenient_int(&json!(true)), 0);
        assert_eq!(parse_lenient_int(&json!([1])), 0);
    }

    #[test]
    fn test_quantity_clamps_negatives() {
        assert_eq!(coerce_quantity(&json!(-3)), 0);
        assert_eq!(coerce_quantity(&json!("4")), 4);
    }

    #[test]
    fn test_oversized_input_saturates() {
        assert_eq!(parse_lenient_int(&json!(u64::MAX)), i64::MAX);
        assert_eq!(parse_lenient_int(&json!("99999999999999999999")), i64::MAX);
    }
}
