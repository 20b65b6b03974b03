//! Connector: shared state and helpers for the action handlers

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::catalog::{catalog, Catalog, EntitySpec};
use crate::idempotency::{IdempotencyStore, InMemoryIdempotencyCache};
use crate::observability::{Logger, Severity};
use crate::store::{InMemoryStore, RecordStore, StoreError};

use super::errors::{ActionError, ActionResult};

/// The connector: action handlers plus their collaborators.
///
/// Stateless per invocation; the idempotency cache is the only state
/// shared across requests besides the read-only catalog.
pub struct Connector {
    pub(crate) store: Arc<dyn RecordStore>,
    pub(crate) idempotency: Arc<dyn IdempotencyStore>,
    pub(crate) catalog: &'static Catalog,
}

impl Connector {
    pub fn new(store: Arc<dyn RecordStore>, idempotency: Arc<dyn IdempotencyStore>) -> Self {
        Self {
            store,
            idempotency,
            catalog: catalog(),
        }
    }

    /// Connector over the in-memory store and cache (tests,
    /// single-instance deployments)
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(InMemoryIdempotencyCache::new()),
        )
    }

    /// Resolve a protocol type name against the catalog
    pub(crate) fn entity(&self, type_name: &str) -> ActionResult<&'static EntitySpec> {
        self.catalog
            .entity(type_name)
            .ok_or_else(|| ActionError::UnsupportedType(type_name.to_string()))
    }

    /// Cached response for a replayed idempotency key, if any
    pub(crate) fn replay(&self, key: Option<&str>) -> Option<Value> {
        let key = key?;
        let cached = self.idempotency.get(key);
        if cached.is_some() {
            Logger::log(Severity::Info, "idempotent_replay", &[("key", key)]);
        }
        cached
    }

    /// Record the response produced for an idempotency key
    pub(crate) fn remember(&self, key: Option<&str>, response: &Value) {
        if let Some(key) = key {
            self.idempotency.put(key, response.clone());
        }
    }

    /// Render a stored row in protocol casing. Only readable catalog
    /// fields survive; unknown columns are dropped.
    pub(crate) fn to_protocol(&self, entity: &EntitySpec, row: &Value) -> Value {
        let mut out = Map::new();
        for field in entity.fields {
            if !field.readable {
                continue;
            }
            if let Some(value) = row.get(field.column) {
                out.insert(field.protocol_name.to_string(), value.clone());
            }
        }
        Value::Object(out)
    }

    /// Map a store failure to an action error with a sanitized message
    pub(crate) fn map_store_error(err: StoreError) -> ActionError {
        match err {
            StoreError::NotFound => ActionError::NotFound,
            other => {
                Logger::log_stderr(
                    Severity::Error,
                    "store_failure",
                    &[("detail", &other.to_string())],
                );
                ActionError::Store(other.public_label().to_string())
            }
        }
    }
}

/// Resolve the effective idempotency key: body field wins over the
/// `Idempotency-Key` header.
pub fn effective_idempotency_key(
    body_key: Option<String>,
    header_key: Option<String>,
) -> Option<String> {
    body_key.or(header_key)
}
