//! # Type Catalog
//!
//! Static, declarative descriptions of the entities the connector exposes.
//! The catalog is the single source of truth for field aliasing: every
//! protocol field name maps to exactly one storage column, and unmapped
//! names are ignored rather than guessed.

mod registry;
mod types;

pub use registry::{catalog, Catalog};
pub use types::{EntitySpec, FieldDeclaration, FieldSpec, FieldType, TypeDeclaration};
