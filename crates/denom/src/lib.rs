//! Denom: value-and-unit normalization for figures extracted from financial documents.
//!
//! Extraction pipelines hand over raw pairs like `("4,000", "million USD")`,
//! `("4100", "X")` or `("4.1", "B people")`. Denom turns each pair into a
//! canonical value string and unit string: embedded scale words are folded
//! into the number, the number is re-expressed at a human-readable magnitude,
//! and the unit is rewritten to carry the scale name.
//!
//! # Core Principles
//!
//! - **Pure computation**: no I/O, no shared mutable state; every call is a
//!   function of its arguments
//! - **Soft non-matches**: a classifier that does not recognize its domain
//!   reports [`Classification::NoMatch`] instead of erroring, so the
//!   dispatcher can fall through cheaply
//! - **Faithful pass-through**: input no classifier recognizes is returned
//!   unchanged, never re-parsed or reformatted
//!
//! # Example
//!
//! ```
//! use denom::Normalizer;
//!
//! let normalizer = Normalizer::new();
//!
//! let result = normalizer.normalize("4,000", Some("million USD"));
//! assert_eq!(result.value, "4");
//! assert_eq!(result.unit.as_deref(), Some("billion USD"));
//!
//! // Unrecognized input passes through untouched.
//! let result = normalizer.normalize("up", Some("up"));
//! assert_eq!(result.value, "up");
//! assert_eq!(result.unit.as_deref(), Some("up"));
//! ```

pub mod classify;
pub mod error;
pub mod scale;
pub mod value;

mod format;
mod normalizer;

pub use classify::{
    Classification, Classifier, CountClassifier, CurrencyClassifier, MultipleClassifier,
    DEFAULT_CURRENCY_CODES,
};
pub use error::{DenomError, Result};
pub use normalizer::{Normalized, Normalizer, NormalizerConfig};
pub use scale::{rescale_to_magnitude, resolve_unit_scale};
pub use value::RawValue;
