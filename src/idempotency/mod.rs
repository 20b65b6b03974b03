//! # Idempotency Cache
//!
//! Process-lifetime key -> response store applied to mutating actions.
//! A replayed key returns the original response verbatim and performs no
//! store mutation, giving at-most-once externally visible side effects per
//! key even though the store call itself is not transactionally
//! idempotent.

mod cache;

pub use cache::{IdempotencyStore, InMemoryIdempotencyCache};
