//! Classification strategies for raw value/unit pairs.
//!
//! Each classifier inspects the pair for its own domain signature — an
//! explicit currency code, a "times"/"×" ratio, a bare count — and either
//! produces a formatted pair or reports that its rule does not apply. The
//! dispatcher in [`crate::Normalizer`] tries them in a fixed priority order.

mod count;
mod currency;
mod multiple;

pub use count::CountClassifier;
pub use currency::{CurrencyClassifier, DEFAULT_CURRENCY_CODES};
pub use multiple::MultipleClassifier;

use serde::{Deserialize, Serialize};

use crate::value::RawValue;

/// Outcome of a single classifier.
///
/// `NoMatch` is a soft signal that the classifier's domain rule does not
/// apply; it is not an error. Matching is decided by this variant alone —
/// a legitimately formatted value of `"0"` is still a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// The classifier recognized the input and produced a formatted pair.
    Matched { value: String, unit: String },
    /// The classifier's domain rule does not apply to this input.
    NoMatch,
}

impl Classification {
    /// Returns true if the classifier produced a formatted pair.
    pub fn is_match(&self) -> bool {
        matches!(self, Classification::Matched { .. })
    }
}

/// A normalization strategy that decides its own applicability.
pub trait Classifier: Send + Sync {
    /// Short name identifying the strategy (recorded as provenance on the
    /// dispatcher's output).
    fn name(&self) -> &'static str;

    /// Inspect the pair and produce a formatted pair, or `NoMatch`.
    ///
    /// A value-parse failure inside a classifier is converted to `NoMatch`,
    /// never propagated.
    fn classify(&self, value: &RawValue, unit: Option<&str>) -> Classification;
}
