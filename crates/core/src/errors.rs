//! Core error types for the trailguard engine.
//!
//! The engine is designed to degrade to "no signal" rather than fail:
//! missing prices, unknown cost bases, and empty date ranges are valid
//! outcomes, not errors. The variants here cover the narrow set of
//! conditions that must reach the caller, chiefly a snapshot repository
//! that cannot be queried. Storage-specific errors are converted to these
//! types by the repository implementation.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the signal engine.
#[derive(Error, Debug)]
pub enum Error {
    /// The snapshot repository could not be queried. The engine has no
    /// valid fallback without data, so this always propagates.
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for externally supplied data.
///
/// Raised by repository implementations when stored rows cannot be
/// interpreted (unparseable dates, malformed decimals).
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
