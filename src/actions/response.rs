//! Action response types
//!
//! The mutating actions (create, patch) build raw `serde_json::Value`
//! responses so idempotency replays return the cached value verbatim;
//! read actions use the typed shapes here.

use serde::Serialize;
use serde_json::Value;

use crate::catalog::TypeDeclaration;

/// SearchRecords response: records already re-mapped to protocol casing
#[derive(Debug, Clone, Serialize)]
pub struct SearchRecordsResponse {
    pub records: Vec<Value>,
}

/// GetTypeNames response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeNamesResponse {
    pub type_names: Vec<String>,
}

/// Per-type failure entry in a GetTypeDefinitions response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinitionError {
    pub type_name: String,
    pub error: String,
}

/// GetTypeDefinitions response: partial success, resolved declarations
/// alongside per-type errors
#[derive(Debug, Clone, Serialize)]
pub struct TypeDefinitionsResponse {
    pub declarations: Vec<TypeDeclaration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<TypeDefinitionError>>,
}

/// Verify response
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub matches: Vec<Value>,
}
