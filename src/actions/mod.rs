//! # Data IO Action Handlers
//!
//! The six protocol actions, orchestrating the catalog, filter
//! translator, record normalizer, idempotency cache and store
//! collaborator. Handlers are stateless per invocation; the only state
//! crossing invocations is the idempotency cache.

mod create;
pub mod errors;
mod handler;
mod patch;
mod request;
mod response;
mod schema;
mod search;
mod verify;

pub use errors::{ActionError, ActionResult, ErrorResponse};
pub use handler::Connector;
pub use request::{
    CreateRecordRequest, GetTypeDefinitionsRequest, Pagination, PatchRecordRequest, SearchQuery,
    SearchRecordsRequest, VerifyRequest,
};
pub use response::{
    SearchRecordsResponse, TypeDefinitionError, TypeDefinitionsResponse, TypeNamesResponse,
    VerifyResponse,
};
