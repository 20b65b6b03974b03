//! # Record Normalization
//!
//! Maps inbound mixed-case payloads onto canonical storage columns for
//! create and patch, stamping timestamps and enforcing the required-field
//! policy. Normalization is fail-closed: a create missing a mandatory
//! identity field is rejected before any store call.

pub mod errors;
mod normalizer;

pub use errors::{NormalizeError, NormalizeResult};
pub use normalizer::{normalize_for_create, normalize_for_patch, normalize_tax_id, project_known};
