//! Plain-count classification — the fallback for bare figures with an
//! optional unit ("ea", "people", or nothing at all).

use crate::format::compact;
use crate::scale::{rescale_to_magnitude, resolve_unit_scale};
use crate::value::RawValue;

use super::{Classification, Classifier};

/// Recognizes any parseable figure as a count.
#[derive(Debug, Clone, Default)]
pub struct CountClassifier;

impl CountClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Classifier for CountClassifier {
    fn name(&self) -> &'static str {
        "count"
    }

    fn classify(&self, value: &RawValue, unit: Option<&str>) -> Classification {
        let unit = unit.unwrap_or("");

        let (amount, mut cleaned_unit) = match resolve_unit_scale(value.clone(), unit) {
            Ok(resolved) => resolved,
            Err(_) => return Classification::NoMatch,
        };
        let (mantissa, scale_name) = match rescale_to_magnitude(amount) {
            Ok(rescaled) => rescaled,
            Err(_) => return Classification::NoMatch,
        };

        // A scaled count of "each" is just a scaled number.
        if !scale_name.is_empty() && (cleaned_unit == "ea" || cleaned_unit == "each") {
            cleaned_unit.clear();
        }

        Classification::Matched {
            value: compact(mantissa),
            unit: format!("{scale_name} {cleaned_unit}").trim().to_string(),
        }
    }
}
