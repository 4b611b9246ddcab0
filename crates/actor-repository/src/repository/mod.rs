//! Domain wrappers around the generic store.

pub mod actors_repository;

pub use actors_repository::ActorsRepository;
