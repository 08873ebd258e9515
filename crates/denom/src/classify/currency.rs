//! Currency amount classification.

use indexmap::IndexSet;

use crate::format::{compact, two_decimals};
use crate::scale::{rescale_to_magnitude, resolve_unit_scale};
use crate::value::RawValue;

use super::{Classification, Classifier};

/// Currency codes recognized out of the box.
pub const DEFAULT_CURRENCY_CODES: &[&str] = &["USD", "EUR", "JPY", "NTD"];

/// Recognizes amounts whose unit carries an explicit currency code.
///
/// The code set starts from [`DEFAULT_CURRENCY_CODES`] and can be extended
/// per instance:
///
/// ```
/// use denom::{Classification, Classifier, CurrencyClassifier, RawValue};
///
/// let classifier = CurrencyClassifier::new().with_code("GBP");
/// let result = classifier.classify(&RawValue::from("1_500_000"), Some("GBP"));
/// assert_eq!(
///     result,
///     Classification::Matched { value: "1.5".into(), unit: "million GBP".into() }
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CurrencyClassifier {
    /// Effective code set, uppercased, in insertion order.
    codes: IndexSet<String>,
}

impl CurrencyClassifier {
    /// Create a classifier recognizing the default currency codes.
    pub fn new() -> Self {
        Self {
            codes: DEFAULT_CURRENCY_CODES
                .iter()
                .map(|code| code.to_string())
                .collect(),
        }
    }

    /// Add a single currency code to the recognized set.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.codes.insert(code.into().to_uppercase());
        self
    }

    /// Add a collection of currency codes to the recognized set.
    pub fn with_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for code in codes {
            self.codes.insert(code.into().to_uppercase());
        }
        self
    }

    /// The effective code set, in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl Default for CurrencyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for CurrencyClassifier {
    fn name(&self) -> &'static str {
        "currency"
    }

    fn classify(&self, value: &RawValue, unit: Option<&str>) -> Classification {
        // Currency must be explicit: no unit, no match.
        let unit = match unit {
            Some(u) if !u.is_empty() => u,
            _ => return Classification::NoMatch,
        };

        let has_code = unit
            .split_whitespace()
            .any(|token| self.codes.contains(token.to_uppercase().as_str()));
        if !has_code {
            return Classification::NoMatch;
        }

        let (amount, cleaned_unit) = match resolve_unit_scale(value.clone(), unit) {
            Ok(resolved) => resolved,
            Err(_) => return Classification::NoMatch,
        };
        let (mantissa, scale_name) = match rescale_to_magnitude(amount) {
            Ok(rescaled) => rescaled,
            Err(_) => return Classification::NoMatch,
        };

        if scale_name.is_empty() {
            // Sub-thousand amounts keep the conventional two decimals.
            Classification::Matched {
                value: two_decimals(mantissa),
                unit: cleaned_unit,
            }
        } else {
            Classification::Matched {
                value: compact(mantissa),
                unit: format!("{scale_name} {cleaned_unit}"),
            }
        }
    }
}
