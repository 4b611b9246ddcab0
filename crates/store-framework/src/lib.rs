//! # Store Framework
//!
//! Building blocks for type-safe, in-memory resource stores. The crate separates the
//! *plumbing* of keeping records (id assignment, ordering, lookup, not-found handling,
//! logging) from the *domain* (what a record is and how it changes).
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - your domain model and its create/update payloads
//! 2. **Storage Layer** ([`ResourceStore`]) - ordered records plus an owned id counter
//! 3. **Interface Layer** ([`Repository`]) - domain wrappers with their own error type
//!
//! ## Ownership Model
//!
//! - A store owns its records exclusively. Reads return clones.
//! - Mutations take `&mut self`. There are no locks; wrap the whole repository in one if
//!   it must be shared across threads.
//! - The id counter lives on the store instance, so two stores never share ids state.
//!
//! ## Observability
//!
//! Every operation emits a `tracing` event with an `entity_type` field. Call
//! [`tracing::setup_tracing`] once at startup and control verbosity with `RUST_LOG`.

pub mod entity;
pub mod error;
pub mod repository;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use entity::StoreEntity;
pub use error::StoreError;
pub use repository::Repository;
pub use store::ResourceStore;
