//! # Authentication
//!
//! Bearer token verification for inbound requests. Token issuance is
//! owned by the external identity provider; this module only validates
//! what arrives in the `Authorization` header and derives a request
//! context from it.

pub mod context;
pub mod errors;
pub mod jwt;

pub use context::AuthContext;
pub use errors::{AuthError, AuthResult};
pub use jwt::{JwtClaims, JwtConfig, JwtVerifier};
