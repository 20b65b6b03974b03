//! # In-Memory Store
//!
//! Reference `RecordStore` implementation backed by an RwLock'd table map.
//! Serves tests and single-instance deployments; a SQL-backed
//! implementation slots in behind the same trait.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::query::{QueryPage, RecordStore, StoreQuery};

/// In-memory record store: table name -> rows
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<HashMap<String, Vec<Value>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project a row down to the requested columns
    fn project(row: Value, columns: &Option<Vec<String>>) -> Value {
        match columns {
            None => row,
            Some(cols) => {
                if let Value::Object(obj) = row {
                    let filtered: serde_json::Map<String, Value> = obj
                        .into_iter()
                        .filter(|(k, _)| cols.iter().any(|c| c == k))
                        .collect();
                    Value::Object(filtered)
                } else {
                    row
                }
            }
        }
    }
}

impl RecordStore for InMemoryStore {
    fn fetch(&self, query: &StoreQuery) -> StoreResult<QueryPage> {
        let tables = self.tables.read().map_err(|_| StoreError::LockPoisoned)?;

        let rows = tables.get(&query.table).cloned().unwrap_or_default();

        let matched: Vec<Value> = rows
            .into_iter()
            .filter(|r| query.predicates.iter().all(|p| p.matches(r)))
            .collect();

        let total = matched.len();

        let page = matched
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .map(|r| Self::project(r, &query.columns))
            .collect();

        Ok(QueryPage { rows: page, total })
    }

    fn insert(&self, table: &str, mut record: Value) -> StoreResult<Value> {
        if record.get("id").is_none() {
            if let Some(obj) = record.as_object_mut() {
                obj.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
            }
        }

        let mut tables = self.tables.write().map_err(|_| StoreError::LockPoisoned)?;

        tables
            .entry(table.to_string())
            .or_default()
            .push(record.clone());

        Ok(record)
    }

    fn update(&self, table: &str, id: &str, changes: Value) -> StoreResult<Value> {
        let mut tables = self.tables.write().map_err(|_| StoreError::LockPoisoned)?;

        let rows = tables.get_mut(table).ok_or(StoreError::NotFound)?;

        let row = rows
            .iter_mut()
            .find(|r| r.get("id").and_then(|v| v.as_str()) == Some(id))
            .ok_or(StoreError::NotFound)?;

        if let (Some(row_obj), Some(changes_obj)) = (row.as_object_mut(), changes.as_object()) {
            for (key, value) in changes_obj {
                row_obj.insert(key.clone(), value.clone());
            }
        }

        Ok(row.clone())
    }
}
