//! Data IO action routes
//!
//! One POST route per protocol action, plus health. Bearer extraction
//! happens here; handlers listed with a 401 in the protocol table
//! require an authenticated context.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::actions::{
    ActionError, Connector, CreateRecordRequest, GetTypeDefinitionsRequest, PatchRecordRequest,
    SearchRecordsRequest, SearchRecordsResponse, TypeDefinitionsResponse, TypeNamesResponse,
    VerifyRequest, VerifyResponse,
};
use crate::auth::{AuthContext, JwtVerifier};

/// Shared state: the connector and the bearer verifier
pub struct ConnectorState {
    pub connector: Connector,
    pub jwt: JwtVerifier,
}

impl ConnectorState {
    pub fn new(connector: Connector, jwt: JwtVerifier) -> Self {
        Self { connector, jwt }
    }
}

/// Build the Data IO action router
pub fn dataio_routes(state: Arc<ConnectorState>) -> Router {
    Router::new()
        .route("/CreateRecord", post(create_record_handler))
        .route("/SearchRecords", post(search_records_handler))
        .route("/PatchRecord", post(patch_record_handler))
        .route(
            "/GetTypeNames",
            get(get_type_names_handler).post(get_type_names_handler),
        )
        .route("/GetTypeDefinitions", post(get_type_definitions_handler))
        .route("/Verify", post(verify_handler))
        .with_state(state)
}

/// Health check routes
pub fn health_routes() -> Router {
    Router::new().route(
        "/health",
        get(|| async { Json(json!({"status": "ok", "service": "databridge"})) }),
    )
}

/// Derive the auth context from request headers.
///
/// A missing header is anonymous access (individual actions decide
/// whether that is acceptable); a present-but-invalid bearer is a 401.
fn extract_context(state: &ConnectorState, headers: &HeaderMap) -> Result<AuthContext, ActionError> {
    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        if let Some(token) = auth.strip_prefix("Bearer ") {
            let claims = state.jwt.verify(token).map_err(ActionError::Auth)?;
            return Ok(AuthContext::authenticated(claims.sub));
        }
    }
    Ok(AuthContext::anonymous())
}

/// `Idempotency-Key` header value, if present
fn idempotency_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get("idempotency-key")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

async fn create_record_handler(
    State(state): State<Arc<ConnectorState>>,
    headers: HeaderMap,
    Json(request): Json<CreateRecordRequest>,
) -> Result<Json<Value>, ActionError> {
    let ctx = extract_context(&state, &headers)?;
    ctx.require_authenticated().map_err(ActionError::Auth)?;

    let response = state
        .connector
        .create_record(request, idempotency_header(&headers))?;
    Ok(Json(response))
}

async fn search_records_handler(
    State(state): State<Arc<ConnectorState>>,
    Json(request): Json<SearchRecordsRequest>,
) -> Result<Json<SearchRecordsResponse>, ActionError> {
    let response = state.connector.search_records(request)?;
    Ok(Json(response))
}

async fn patch_record_handler(
    State(state): State<Arc<ConnectorState>>,
    headers: HeaderMap,
    Json(request): Json<PatchRecordRequest>,
) -> Result<Json<Value>, ActionError> {
    let ctx = extract_context(&state, &headers)?;
    ctx.require_authenticated().map_err(ActionError::Auth)?;

    let response = state
        .connector
        .patch_record(request, idempotency_header(&headers))?;
    Ok(Json(response))
}

async fn get_type_names_handler(
    State(state): State<Arc<ConnectorState>>,
    headers: HeaderMap,
) -> Result<Json<TypeNamesResponse>, ActionError> {
    let ctx = extract_context(&state, &headers)?;
    ctx.require_authenticated().map_err(ActionError::Auth)?;

    Ok(Json(state.connector.get_type_names()))
}

async fn get_type_definitions_handler(
    State(state): State<Arc<ConnectorState>>,
    Json(request): Json<GetTypeDefinitionsRequest>,
) -> Result<Json<TypeDefinitionsResponse>, ActionError> {
    let response = state.connector.get_type_definitions(request)?;
    Ok(Json(response))
}

async fn verify_handler(
    State(state): State<Arc<ConnectorState>>,
    headers: HeaderMap,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, ActionError> {
    let ctx = extract_context(&state, &headers)?;
    ctx.require_authenticated().map_err(ActionError::Auth)?;

    let response = state.connector.verify(request)?;
    Ok(Json(response))
}
