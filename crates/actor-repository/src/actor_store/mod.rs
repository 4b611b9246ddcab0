//! # Actor Store
//!
//! Actor-specific resource logic: the [`StoreEntity`](store_framework::StoreEntity)
//! implementation for [`Actor`](crate::model::Actor), the [`ActorError`] type, and the
//! factory functions that build an [`ActorsRepository`].
//!
//! ## Usage
//!
//! ```rust
//! use actor_repository::actor_store;
//! use actor_repository::model::ActorCreate;
//! use store_framework::Repository;
//!
//! let mut actors = actor_store::new();
//! let added = actors.add_actor(ActorCreate::new("Alice", 1980)).unwrap();
//! assert_eq!(added.id, 0);
//! assert_eq!(actors.get(0), Some(added));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::repository::ActorsRepository;
use store_framework::ResourceStore;

/// Creates an empty actor repository. The first actor added gets id 0.
pub fn new() -> ActorsRepository {
    ActorsRepository::new(ResourceStore::new())
}

/// Creates an empty actor repository with room for `capacity` actors.
pub fn new_with_capacity(capacity: usize) -> ActorsRepository {
    ActorsRepository::new(ResourceStore::with_capacity(capacity))
}
