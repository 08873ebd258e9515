//! Error types for the Denom library.

use thiserror::Error;

/// Main error type for Denom operations.
///
/// The engine has exactly one hard failure: a value that cannot be read as
/// a number. Everything else (an unrecognized unit, a non-currency code, a
/// value that is not a multiplier pattern) is a soft non-match carried in
/// [`crate::Classification::NoMatch`], not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenomError {
    /// The value could not be interpreted as a number.
    #[error("invalid value format: '{input}'")]
    InvalidValue { input: String },
}

/// Result type alias for Denom operations.
pub type Result<T> = std::result::Result<T, DenomError>;
