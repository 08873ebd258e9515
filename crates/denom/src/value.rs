//! Raw input values as they arrive from an extraction pipeline.
//!
//! Extractors hand over whatever the document contained: sometimes an
//! already-numeric figure, sometimes a string like `"4_000"` or `" 2,500 "`.
//! [`RawValue`] keeps that distinction so the pass-through path can return
//! text input byte-for-byte unchanged.

use std::fmt;

use crate::error::{DenomError, Result};

/// A raw value paired with a unit by the extraction pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A value that was already numeric at the source.
    Number(f64),
    /// A free-text value, possibly numeric with grouping separators,
    /// possibly not numeric at all.
    Text(String),
}

impl RawValue {
    /// Interpret the value as a floating-point number.
    ///
    /// Text values tolerate `_` and `,` grouping separators and surrounding
    /// whitespace (`"4_000"`, `" 2,500,000 "`). Anything that still fails to
    /// parse is an [`DenomError::InvalidValue`] — the engine's single hard
    /// failure.
    pub fn to_f64(&self) -> Result<f64> {
        match self {
            RawValue::Number(n) => Ok(*n),
            RawValue::Text(s) => parse_numeric(s),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<u64> for RawValue {
    fn from(value: u64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Parse a numeric string, ignoring grouping separators.
fn parse_numeric(input: &str) -> Result<f64> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|&c| !matches!(c, '_' | ','))
        .collect();

    if cleaned.is_empty() {
        return Err(DenomError::InvalidValue {
            input: input.to_string(),
        });
    }

    cleaned.parse::<f64>().map_err(|_| DenomError::InvalidValue {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(RawValue::from("4000").to_f64().unwrap(), 4000.0);
        assert_eq!(RawValue::from("3.5").to_f64().unwrap(), 3.5);
        assert_eq!(RawValue::from("-13").to_f64().unwrap(), -13.0);
    }

    #[test]
    fn test_parse_with_separators() {
        assert_eq!(RawValue::from("4_000").to_f64().unwrap(), 4000.0);
        assert_eq!(RawValue::from("2,500,000").to_f64().unwrap(), 2_500_000.0);
        assert_eq!(RawValue::from(" 1_500_000 ").to_f64().unwrap(), 1_500_000.0);
    }

    #[test]
    fn test_parse_failures() {
        assert!(RawValue::from("abcd").to_f64().is_err());
        assert!(RawValue::from("").to_f64().is_err());
        assert!(RawValue::from("   ").to_f64().is_err());
        assert!(RawValue::from("_,_").to_f64().is_err());
    }

    #[test]
    fn test_number_passes_through() {
        assert_eq!(RawValue::from(4_000_000_000u64).to_f64().unwrap(), 4e9);
        assert_eq!(RawValue::from(-2.5).to_f64().unwrap(), -2.5);
    }

    #[test]
    fn test_display_preserves_text() {
        assert_eq!(RawValue::from("up").to_string(), "up");
        assert_eq!(RawValue::from(" 4,000 ").to_string(), " 4,000 ");
        assert_eq!(RawValue::from(4000u32).to_string(), "4000");
    }
}
