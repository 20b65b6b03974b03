//! # Observability
//!
//! Structured JSON logging for the connector.

mod logger;

pub use logger::{Logger, Severity};
