//! # Normalization Errors

use thiserror::Error;

/// Result type for normalization
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Record normalization errors
#[derive(Debug, Clone, Error)]
pub enum NormalizeError {
    /// A mandatory identity field is absent after normalization
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// The payload is not a JSON object
    #[error("Record payload must be a JSON object")]
    NotAnObject,
}
