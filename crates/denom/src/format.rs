//! Mantissa formatting helpers shared by the classifiers.

/// Format with exactly two decimal places.
pub(crate) fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

/// Format with two decimal places, then drop trailing zeros and a trailing
/// decimal point: `4.00` becomes `4`, `4.50` becomes `4.5`.
pub(crate) fn compact(value: f64) -> String {
    let formatted = two_decimals(value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
