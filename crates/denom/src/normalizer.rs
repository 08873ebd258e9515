//! Dispatcher: tries the classifiers in priority order.

use serde::{Deserialize, Serialize};

use crate::classify::{
    Classification, Classifier, CountClassifier, CurrencyClassifier, MultipleClassifier,
};
use crate::value::RawValue;

/// Configuration for a [`Normalizer`].
#[derive(Debug, Clone, Default)]
pub struct NormalizerConfig {
    /// Currency codes recognized in addition to the built-in defaults.
    pub extra_currency_codes: Vec<String>,
}

/// Result of normalizing a raw value/unit pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalized {
    /// Formatted value, or the original value rendered verbatim when no
    /// classifier matched.
    pub value: String,
    /// Formatted unit. `None` only when an unmatched input had no unit;
    /// a matched pair always carries a unit string, possibly empty (a
    /// scaled bare count).
    pub unit: Option<String>,
    /// Name of the classifier that matched, `None` for the pass-through.
    pub classifier: Option<String>,
}

/// The normalization engine: an ordered list of classifiers with a
/// pass-through fallback.
///
/// Priority order is currency → multiplier → count. Unit strings can be
/// ambiguous (a currency code also reads as a generic count unit), so the
/// first classifier to match wins.
///
/// # Example
///
/// ```
/// use denom::{Normalizer, NormalizerConfig};
///
/// let normalizer = Normalizer::with_config(NormalizerConfig {
///     extra_currency_codes: vec!["GBP".to_string()],
/// });
///
/// let result = normalizer.normalize("1_500_000", Some("GBP"));
/// assert_eq!(result.value, "1.5");
/// assert_eq!(result.unit.as_deref(), Some("million GBP"));
/// ```
pub struct Normalizer {
    classifiers: Vec<Box<dyn Classifier>>,
}

impl Normalizer {
    /// Create a normalizer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(NormalizerConfig::default())
    }

    /// Create a normalizer with custom configuration.
    pub fn with_config(config: NormalizerConfig) -> Self {
        let currency = CurrencyClassifier::new().with_codes(config.extra_currency_codes);

        let classifiers: Vec<Box<dyn Classifier>> = vec![
            Box::new(currency),
            Box::new(MultipleClassifier::new()),
            Box::new(CountClassifier::new()),
        ];

        Self { classifiers }
    }

    /// Normalize a raw value/unit pair.
    ///
    /// Returns the first classifier's formatted pair, or the original pair
    /// unchanged (value rendered verbatim, unit `Option` preserved) when
    /// none apply. Never fails: a hard value-parse error inside a
    /// classifier surfaces as the pass-through, not as an error.
    pub fn normalize(&self, value: impl Into<RawValue>, unit: Option<&str>) -> Normalized {
        let value = value.into();

        for classifier in &self.classifiers {
            if let Classification::Matched {
                value: formatted_value,
                unit: formatted_unit,
            } = classifier.classify(&value, unit)
            {
                return Normalized {
                    value: formatted_value,
                    unit: Some(formatted_unit),
                    classifier: Some(classifier.name().to_string()),
                };
            }
        }

        Normalized {
            value: value.to_string(),
            unit: unit.map(str::to_string),
            classifier: None,
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
