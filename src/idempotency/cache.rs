//! Key -> response cache behind a get/put trait

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

/// Idempotency collaborator interface.
///
/// The in-memory default covers single-instance deployments; a durable
/// keyed store implements the same trait for multi-instance ones.
pub trait IdempotencyStore: Send + Sync {
    /// Cached response for `key`, if any
    fn get(&self, key: &str) -> Option<Value>;

    /// Record the response produced for `key`
    fn put(&self, key: &str, response: Value);
}

/// In-memory idempotency cache. Entries never expire within the process
/// lifetime; the idempotency window is the caller's retry window.
#[derive(Default)]
pub struct InMemoryIdempotencyCache {
    entries: Mutex<HashMap<String, Value>>,
}

impl InMemoryIdempotencyCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdempotencyStore for InMemoryIdempotencyCache {
    fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn put(&self, key: &str, response: Value) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), response);
    }
}
