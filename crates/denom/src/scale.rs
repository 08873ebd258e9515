//! Scale-word resolution and magnitude rescaling.
//!
//! Financial documents write scale into the unit ("4,000 million USD") or
//! leave a figure fully expanded ("4100000000"). [`resolve_unit_scale`]
//! folds a scale word found in the unit into the number;
//! [`rescale_to_magnitude`] re-expresses an expanded number in the largest
//! scale that keeps the mantissa in `[1, 1000)`.

use crate::error::Result;
use crate::value::RawValue;

/// Scale words recognized inside a unit string, with their multipliers.
/// Matching is case-insensitive on whole whitespace-separated tokens.
const SCALE_TERMS: &[(&str, f64)] = &[
    ("thousand", 1e3),
    ("k", 1e3),
    ("million", 1e6),
    ("m", 1e6),
    ("billion", 1e9),
    ("b", 1e9),
    ("trillion", 1e12),
    ("t", 1e12),
];

/// Magnitude thresholds from largest to smallest. The first threshold the
/// absolute value meets or exceeds names the scale; below one thousand the
/// scale name is empty.
const MAGNITUDE_THRESHOLDS: &[(f64, &str)] = &[
    (1e12, "trillion"),
    (1e9, "billion"),
    (1e6, "million"),
    (1e3, "thousand"),
];

/// Look up the multiplier for a lowercased unit token.
fn scale_factor(token: &str) -> Option<f64> {
    SCALE_TERMS
        .iter()
        .find(|(term, _)| *term == token)
        .map(|(_, factor)| *factor)
}

/// Fold a scale word embedded in `unit` into the value.
///
/// Tokenizes the unit on whitespace and scans left to right; the first token
/// whose lowercased form is a scale word sets the multiplier and is removed
/// from the unit (remaining tokens are re-joined with single spaces, order
/// and casing preserved). Without a match the value is returned with factor
/// 1 and the unit verbatim. An empty unit is valid input.
///
/// # Errors
///
/// [`crate::DenomError::InvalidValue`] when the value cannot be read as a
/// number. Once the value parses, this operation never fails.
///
/// # Example
///
/// ```
/// use denom::resolve_unit_scale;
///
/// let (value, unit) = resolve_unit_scale("2.3", "Million Records").unwrap();
/// assert_eq!(value, 2_300_000.0);
/// assert_eq!(unit, "Records");
/// ```
pub fn resolve_unit_scale(value: impl Into<RawValue>, unit: &str) -> Result<(f64, String)> {
    let amount = value.into().to_f64()?;

    let tokens: Vec<&str> = unit.split_whitespace().collect();
    for (i, token) in tokens.iter().enumerate() {
        if let Some(factor) = scale_factor(&token.to_lowercase()) {
            let mut remaining = tokens.clone();
            remaining.remove(i);
            return Ok((amount * factor, remaining.join(" ")));
        }
    }

    Ok((amount, unit.to_string()))
}

/// Re-express a value in the largest scale that keeps the mantissa in
/// `[1, 1000)`.
///
/// The value is first resolved through [`resolve_unit_scale`] with an empty
/// unit so numeric strings get the same separator handling. The sign is
/// preserved separately; thresholds are compared against the absolute value
/// with `>=`, so a value sitting exactly on a boundary scales to that
/// boundary, not the one below. Values under one thousand come back
/// unscaled with an empty scale name.
///
/// # Example
///
/// ```
/// use denom::rescale_to_magnitude;
///
/// assert_eq!(rescale_to_magnitude(1_500_000u64).unwrap(), (1.5, "million"));
/// assert_eq!(rescale_to_magnitude("-2_500_000_000_000").unwrap(), (-2.5, "trillion"));
/// ```
pub fn rescale_to_magnitude(value: impl Into<RawValue>) -> Result<(f64, &'static str)> {
    let (amount, _) = resolve_unit_scale(value, "")?;

    let sign = if amount < 0.0 { -1.0 } else { 1.0 };
    let magnitude = amount.abs();

    for &(threshold, name) in MAGNITUDE_THRESHOLDS {
        if magnitude >= threshold {
            return Ok((sign * magnitude / threshold, name));
        }
    }

    Ok((sign * magnitude, ""))
}
