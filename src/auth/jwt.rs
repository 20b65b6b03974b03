//! # JWT Verification
//!
//! Stateless bearer token validation (no identity-provider lookup).
//! Issuance lives with the external OAuth collaborator; the connector
//! only checks signature, expiry, issuer and audience.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use super::errors::{AuthError, AuthResult};

/// Claims expected in an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (caller identity)
    pub sub: String,

    /// Issued at timestamp (Unix epoch seconds)
    pub iat: i64,

    /// Expiration timestamp (Unix epoch seconds)
    pub exp: i64,

    /// Audience
    pub aud: String,

    /// Issuer
    pub iss: String,
}

/// JWT verification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Shared HS256 secret
    pub secret: String,

    /// Expected issuer
    pub issuer: String,

    /// Expected audience
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "CHANGE_THIS_SECRET_IN_PRODUCTION".to_string(),
            issuer: "databridge".to_string(),
            audience: "dataio".to_string(),
        }
    }
}

/// Verifies bearer tokens against the configured secret
#[derive(Clone)]
pub struct JwtVerifier {
    config: JwtConfig,
    decoding_key: DecodingKey,
}

impl JwtVerifier {
    /// Create a verifier with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            decoding_key,
        }
    }

    /// Validate a token and extract its claims
    pub fn verify(&self, token: &str) -> AuthResult<JwtClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);

        let token_data =
            decode::<JwtClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AuthError::InvalidSignature
                    }
                    _ => AuthError::MalformedToken,
                }
            })?;

        Ok(token_data.claims)
    }
}
