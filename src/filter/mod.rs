//! # Filter Translation
//!
//! Receives one protocol comparison per search request and converts it
//! into a store predicate. Filter translation is fail-open: an unknown
//! operator or an unmapped field degrades to no filter, never to an
//! error, so forward-compatible callers keep working.

mod comparison;
mod translator;

pub use comparison::{Comparison, ComparisonOperator, Operand};
pub use translator::{translate, Translation};
