//! # Action Errors
//!
//! Error taxonomy for the Data IO actions. Validation errors are raised
//! before any store call; store failures are mapped to sanitized
//! messages at the handler boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;
use crate::record::NormalizeError;

/// Result type for action handlers
pub type ActionResult<T> = Result<T, ActionError>;

/// Data IO action errors
#[derive(Debug, Clone, Error)]
pub enum ActionError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Type name not present in the catalog
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Bad or missing input
    #[error("{0}")]
    Validation(String),

    /// Mutation carries neither a record id nor the natural key
    #[error("Missing record identifier")]
    MissingIdentifier,

    /// Record identifier is not a well-formed UUID
    #[error("Invalid record identifier: {0}")]
    InvalidRecordId(String),

    /// No record matched the identifier
    #[error("Record not found")]
    NotFound,

    /// The translated filter matched more than one record
    #[error("MULTIPLE_RECORDS_FOUND")]
    MultipleRecordsFound,

    // ==================
    // Auth Errors
    // ==================
    /// Authentication error
    #[error("{0}")]
    Auth(#[from] AuthError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Downstream store failure, message already sanitized
    #[error("Store error: {0}")]
    Store(String),
}

impl From<NormalizeError> for ActionError {
    fn from(err: NormalizeError) -> Self {
        ActionError::Validation(err.to_string())
    }
}

impl ActionError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ActionError::UnsupportedType(_) => StatusCode::BAD_REQUEST,
            ActionError::Validation(_) => StatusCode::BAD_REQUEST,
            ActionError::MissingIdentifier => StatusCode::BAD_REQUEST,
            ActionError::InvalidRecordId(_) => StatusCode::BAD_REQUEST,
            ActionError::MultipleRecordsFound => StatusCode::BAD_REQUEST,

            // 401 from auth
            ActionError::Auth(auth_err) => {
                StatusCode::from_u16(auth_err.status_code()).unwrap_or(StatusCode::UNAUTHORIZED)
            }

            // 404 Not Found
            ActionError::NotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ActionError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ActionError> for ErrorResponse {
    fn from(err: ActionError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
