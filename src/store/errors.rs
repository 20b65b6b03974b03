//! # Store Errors
//!
//! Error types for the store collaborator boundary.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No record matched the given identifier
    #[error("Record not found")]
    NotFound,

    /// Shared state lock was poisoned
    #[error("Store lock poisoned")]
    LockPoisoned,

    /// Downstream backend failure (connection, protocol, server-side)
    #[error("Backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Short label safe to surface to callers; raw backend messages
    /// never cross the handler boundary.
    pub fn public_label(&self) -> &'static str {
        match self {
            StoreError::NotFound => "record not found",
            StoreError::LockPoisoned => "store unavailable",
            StoreError::Backend(_) => "store operation failed",
        }
    }
}
