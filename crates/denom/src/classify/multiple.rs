//! Multiplier/ratio classification ("4x", "4100 X", "2.5 times").

use once_cell::sync::Lazy;
use regex::Regex;

use crate::format::compact;
use crate::scale::rescale_to_magnitude;
use crate::value::RawValue;

use super::{Classification, Classifier};

/// A number with a trailing multiplier marker, as in `"4x"` or `"4.5 X"`.
/// Anchored at the start only; trailing text is ignored.
static TIMES_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)?)\s*[xX]").unwrap());

/// Recognizes "times"/"×" style ratios.
#[derive(Debug, Clone, Default)]
pub struct MultipleClassifier;

impl MultipleClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Classifier for MultipleClassifier {
    fn name(&self) -> &'static str {
        "multiple"
    }

    fn classify(&self, value: &RawValue, unit: Option<&str>) -> Classification {
        let mut unit = unit.map(str::to_string);
        if matches!(unit.as_deref(), Some("x") | Some("X")) {
            unit = Some("times".to_string());
        }

        // A text value like "4x" carries the marker itself; pull the number
        // out when the unit does not say otherwise.
        let mut value = value.clone();
        if let RawValue::Text(text) = &value {
            if let Some(captures) = TIMES_PATTERN.captures(text) {
                let unit_agrees = match unit.as_deref() {
                    None => true,
                    Some(u) => u.is_empty() || u == "times",
                };
                if unit_agrees {
                    value = RawValue::Text(captures[1].to_string());
                    unit = Some("times".to_string());
                }
            }
        }

        if unit.as_deref() != Some("times") {
            return Classification::NoMatch;
        }

        let (mantissa, scale_name) = match rescale_to_magnitude(value) {
            Ok(rescaled) => rescaled,
            Err(_) => return Classification::NoMatch,
        };

        Classification::Matched {
            value: compact(mantissa),
            unit: format!("{scale_name} times").trim().to_string(),
        }
    }
}
