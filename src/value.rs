use std::fmt::{Display, Formatter};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::gregorian::is_leap_year;

/// The kind of a value that can't be used as a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Float,
    Null,
    Bool,
    Array,
    Object,
    IntegerOutOfRange,
}

// Numbers keep their source text, so a fraction or exponent marks a float even when its value is
// integral.
fn is_integer_literal(text: &str) -> bool {
    !text.contains(['.', 'e', 'E'])
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::String => "a string",
            ValueKind::Float => "a floating-point number",
            ValueKind::Null => "null",
            ValueKind::Bool => "a boolean",
            ValueKind::Array => "an array",
            ValueKind::Object => "an object",
            ValueKind::IntegerOutOfRange => "an integer outside the 128-bit range",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("year must be an integer, got {kind}")]
pub struct InvalidArgument {
    pub kind: ValueKind,
}

/// Extracts an integer year from an untyped value.
///
/// Only JSON integers are accepted. Text is never parsed, so `"2024"` is rejected just like
/// `2024.5`, and so is `2024.0`. Integers of any magnitude up to the `i128` range are kept exact.
pub fn year_from_value(value: &Value) -> Result<i128, InvalidArgument> {
    let kind = match value {
        Value::Number(number) => {
            let text = number.to_string();
            if !is_integer_literal(&text) {
                ValueKind::Float
            } else if let Ok(year) = text.parse::<i128>() {
                return Ok(year);
            } else {
                ValueKind::IntegerOutOfRange
            }
        }
        Value::String(_) => ValueKind::String,
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    };
    debug!(%kind, "rejecting non-integer year");
    Err(InvalidArgument { kind })
}

/// [`is_leap_year`] for a year that hasn't been type checked yet.
pub fn is_leap_year_value(value: &Value) -> Result<bool, InvalidArgument> {
    let year = year_from_value(value)?;
    Ok(is_leap_year(year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_values() {
        assert_eq!(is_leap_year_value(&json!(2024)), Ok(true));
        assert_eq!(is_leap_year_value(&json!(2000)), Ok(true));
        assert_eq!(is_leap_year_value(&json!(1900)), Ok(false));
        assert_eq!(is_leap_year_value(&json!(2023)), Ok(false));
        assert_eq!(is_leap_year_value(&json!(-400)), Ok(true));
        assert_eq!(is_leap_year_value(&json!(0)), Ok(true));
        assert_eq!(is_leap_year_value(&json!(u64::MAX)), Ok(false));
        assert_eq!(is_leap_year_value(&json!(i64::MIN)), Ok(true));
    }

    #[test]
    fn test_invalid_input_types() {
        let cases = [
            (json!("2024"), ValueKind::String),
            (json!(2024.5), ValueKind::Float),
            (json!(2024.0), ValueKind::Float),
            (json!(null), ValueKind::Null),
            (json!([]), ValueKind::Array),
            (json!({}), ValueKind::Object),
            (json!(true), ValueKind::Bool),
            (json!([2024]), ValueKind::Array),
        ];
        for (value, kind) in cases {
            assert_eq!(
                is_leap_year_value(&value),
                Err(InvalidArgument { kind }),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_year_from_value() {
        assert_eq!(year_from_value(&json!(1996)), Ok(1996));
        assert_eq!(year_from_value(&json!(u64::MAX)), Ok(u64::MAX as i128));
        assert!(year_from_value(&json!("1996")).is_err());
    }

    #[test]
    fn test_parsed_text() {
        let value: Value = serde_json::from_str("2024").unwrap();
        assert_eq!(is_leap_year_value(&value), Ok(true));
        let value: Value = serde_json::from_str("2024.5").unwrap();
        assert_eq!(is_leap_year_value(&value), Err(InvalidArgument { kind: ValueKind::Float }));
        let value: Value = serde_json::from_str("1e3").unwrap();
        assert_eq!(is_leap_year_value(&value), Err(InvalidArgument { kind: ValueKind::Float }));

        // Beyond the 64-bit range serde_json would otherwise fall back to a float.
        let value: Value = serde_json::from_str("18446744073709551616").unwrap();
        assert_eq!(is_leap_year_value(&value), Ok(true));
        let value: Value = serde_json::from_str("-9223372036854775809").unwrap();
        assert_eq!(is_leap_year_value(&value), Ok(false));
        let value: Value = serde_json::from_str("100000000000000000000").unwrap();
        assert_eq!(is_leap_year_value(&value), Ok(true));
        let value: Value = serde_json::from_str("-0").unwrap();
        assert_eq!(is_leap_year_value(&value), Ok(true));
        let value: Value = serde_json::from_str("2000.0").unwrap();
        assert_eq!(is_leap_year_value(&value), Err(InvalidArgument { kind: ValueKind::Float }));
    }

    #[test]
    fn test_integer_beyond_i128() {
        let value: Value = serde_json::from_str("170141183460469231731687303715884105728").unwrap();
        assert_eq!(
            is_leap_year_value(&value),
            Err(InvalidArgument {
                kind: ValueKind::IntegerOutOfRange
            })
        );
        let value: Value = serde_json::from_str("-170141183460469231731687303715884105728").unwrap();
        assert_eq!(year_from_value(&value), Ok(i128::MIN));
    }

    #[test]
    fn test_error_message() {
        let error = is_leap_year_value(&json!(null)).unwrap_err();
        assert_eq!(error.to_string(), "year must be an integer, got null");
        let error = is_leap_year_value(&json!("2024")).unwrap_err();
        assert_eq!(error.to_string(), "year must be an integer, got a string");
    }
}
