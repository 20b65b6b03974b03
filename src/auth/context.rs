//! Request auth context

use super::errors::{AuthError, AuthResult};

/// Auth context carried with each request
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    /// Verified token subject (None if anonymous)
    pub subject: Option<String>,

    /// Whether the request carried a valid credential
    pub is_authenticated: bool,
}

impl AuthContext {
    /// Context for a caller with a verified bearer token
    pub fn authenticated(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            is_authenticated: true,
        }
    }

    /// Context for anonymous access
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Error unless the caller is authenticated
    pub fn require_authenticated(&self) -> AuthResult<()> {
        if self.is_authenticated {
            Ok(())
        } else {
            Err(AuthError::AuthenticationRequired)
        }
    }
}
