//! # Actor Repository
//!
//! An in-memory collection of [`Actor`](model::Actor) records with create, read, update,
//! delete and a combined filter + sort query, built on the generic
//! [`store_framework`].
//!
//! ## Module Tour
//!
//! - **[`model`]**: plain data ([`Actor`](model::Actor), its create/update payloads, and
//!   [`ActorQuery`](model::ActorQuery)).
//! - **[`actor_store`]**: the `StoreEntity` implementation, [`ActorError`](actor_store::ActorError)
//!   and factory functions.
//! - **[`repository`]**: [`ActorsRepository`](repository::ActorsRepository), the API callers use.
//!
//! ## Quick Start
//!
//! ```rust
//! use actor_repository::actor_store;
//! use actor_repository::model::{ActorCreate, ActorQuery, SortBy};
//!
//! let mut actors = actor_store::new();
//! actors.add_actor(ActorCreate::new("Charlie", 1990)).unwrap();
//! actors.add_actor(ActorCreate::new("Alice", 1980)).unwrap();
//!
//! let by_name = actors.query(&ActorQuery::new().sorted_by(SortBy::Name, false));
//! assert_eq!(by_name[0].name, "Alice");
//! ```

pub mod actor_store;
pub mod model;
pub mod repository;

pub use store_framework::Repository;
