//! Action request types (protocol wire shapes)

use serde::Deserialize;
use serde_json::Value;

use crate::filter::Comparison;

/// CreateRecord request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    pub type_name: String,

    #[serde(default)]
    pub idempotency_key: Option<String>,

    #[serde(default)]
    pub record_id: Option<String>,

    pub data: Value,
}

/// PatchRecord request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchRecordRequest {
    pub type_name: String,

    #[serde(default)]
    pub idempotency_key: Option<String>,

    #[serde(default)]
    pub record_id: Option<String>,

    pub data: Value,
}

/// SearchRecords request body
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRecordsRequest {
    pub query: SearchQuery,

    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// The query part of a search request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Type name to search
    pub from: String,

    /// At most one comparison; absent means no filter
    #[serde(default)]
    pub query_filter: Option<Comparison>,

    /// Optional column projection, in protocol casing
    #[serde(default)]
    pub attributes_to_select: Option<Vec<String>>,
}

/// Pagination: the page size is fixed at 1 by the protocol, only the
/// offset travels on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: usize,
}

/// GetTypeDefinitions request body; absent names means "all"
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTypeDefinitionsRequest {
    #[serde(default)]
    pub type_names: Option<Vec<String>>,
}

/// Verify request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub type_name: String,
    pub data: Value,
}
