//! # Store Query Interface
//!
//! Generic query-builder types spoken at the store boundary, plus the
//! `RecordStore` trait every backing store implements.

use serde_json::Value;

use super::errors::StoreResult;

/// A store-level predicate on a single column.
///
/// String matching variants are case-insensitive, mirroring the
/// `%value%` / `value%` / `%value` semantics of the backing store.
#[derive(Debug, Clone, PartialEq)]
pub enum StorePredicate {
    /// Exact match
    Eq { column: String, value: Value },

    /// Negated exact match
    Neq { column: String, value: Value },

    /// Case-insensitive substring match
    ContainsCi { column: String, needle: String },

    /// Case-insensitive prefix match
    StartsWithCi { column: String, prefix: String },

    /// Case-insensitive suffix match
    EndsWithCi { column: String, suffix: String },
}

impl StorePredicate {
    /// The column this predicate constrains
    pub fn column(&self) -> &str {
        match self {
            StorePredicate::Eq { column, .. }
            | StorePredicate::Neq { column, .. }
            | StorePredicate::ContainsCi { column, .. }
            | StorePredicate::StartsWithCi { column, .. }
            | StorePredicate::EndsWithCi { column, .. } => column,
        }
    }

    /// Check whether a row satisfies this predicate.
    ///
    /// Used by the in-memory store; a SQL-backed store would compile the
    /// predicate into its WHERE clause instead.
    pub fn matches(&self, row: &Value) -> bool {
        match self {
            StorePredicate::Eq { column, value } => {
                row.get(column).map(|v| v == value).unwrap_or(false)
            }
            StorePredicate::Neq { column, value } => {
                row.get(column).map(|v| v != value).unwrap_or(true)
            }
            StorePredicate::ContainsCi { column, needle } => {
                Self::string_at(row, column)
                    .map(|s| s.to_lowercase().contains(&needle.to_lowercase()))
                    .unwrap_or(false)
            }
            StorePredicate::StartsWithCi { column, prefix } => {
                Self::string_at(row, column)
                    .map(|s| s.to_lowercase().starts_with(&prefix.to_lowercase()))
                    .unwrap_or(false)
            }
            StorePredicate::EndsWithCi { column, suffix } => {
                Self::string_at(row, column)
                    .map(|s| s.to_lowercase().ends_with(&suffix.to_lowercase()))
                    .unwrap_or(false)
            }
        }
    }

    fn string_at<'a>(row: &'a Value, column: &str) -> Option<&'a str> {
        row.get(column).and_then(|v| v.as_str())
    }
}

/// A query against one table: conjunction of predicates, optional column
/// projection, and a bounded page.
#[derive(Debug, Clone)]
pub struct StoreQuery {
    pub table: String,
    pub predicates: Vec<StorePredicate>,
    pub columns: Option<Vec<String>>,
    pub limit: usize,
    pub offset: usize,
}

impl StoreQuery {
    /// Start a query over `table` with no predicates and a page of 1
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            predicates: Vec::new(),
            columns: None,
            limit: 1,
            offset: 0,
        }
    }

    /// Add a predicate (AND semantics)
    pub fn filter(mut self, predicate: StorePredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Restrict returned columns
    pub fn select(mut self, columns: Vec<String>) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Set the page size
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page offset
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// One page of query results, count-aware.
///
/// `total` is the number of rows matching the predicates before
/// pagination, delivered in the same round trip as the page itself.
#[derive(Debug, Clone)]
pub struct QueryPage {
    pub rows: Vec<Value>,
    pub total: usize,
}

/// The store collaborator interface.
///
/// Implementations must provide exact/prefix/substring string matching and
/// equality/inequality filtering; everything else lives on the connector
/// side of the boundary.
pub trait RecordStore: Send + Sync {
    /// Execute a query, returning the requested page plus the total
    /// match count.
    fn fetch(&self, query: &StoreQuery) -> StoreResult<QueryPage>;

    /// Insert a record, filling in a generated `id` when absent.
    /// Returns the stored record.
    fn insert(&self, table: &str, record: Value) -> StoreResult<Value>;

    /// Merge `changes` into the record identified by `id`.
    /// Returns the updated record.
    fn update(&self, table: &str, id: &str, changes: Value) -> StoreResult<Value>;
}
