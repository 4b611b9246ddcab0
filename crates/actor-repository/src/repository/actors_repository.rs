//! # Actors Repository
//!
//! Provides the domain API for actors. It wraps a `ResourceStore<Actor>`, inherits
//! `list`, `get` and `delete` from [`Repository`], and adds the operations that need
//! actor-specific payloads.
use crate::actor_store::ActorError;
use crate::model::{Actor, ActorCreate, ActorId, ActorQuery, ActorUpdate};
use store_framework::{Repository, ResourceStore, StoreError};
use tracing::{debug, instrument};

/// In-memory repository of actors.
///
/// Not synchronized: share it across threads only behind a lock that covers the
/// whole repository.
#[derive(Debug, Clone, Default)]
pub struct ActorsRepository {
    inner: ResourceStore<Actor>,
}

impl ActorsRepository {
    pub fn new(inner: ResourceStore<Actor>) -> Self {
        Self { inner }
    }

    /// Stores a new actor under the next id and returns it.
    ///
    /// Fails only with [`ActorError::IdsExhausted`], after `u32::MAX + 1` adds to the
    /// same repository.
    #[instrument(skip(self))]
    pub fn add_actor(&mut self, params: ActorCreate) -> Result<Actor, ActorError> {
        self.inner.create(params).map_err(Self::map_error)
    }

    /// Replaces the name and birth year of an existing actor.
    #[instrument(skip(self))]
    pub fn update_actor(&mut self, id: ActorId, update: ActorUpdate) -> Result<Actor, ActorError> {
        self.inner.update(id, update).map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub fn delete_actor(&mut self, id: ActorId) -> Result<Actor, ActorError> {
        self.delete(id)
    }

    /// Filtered, sorted copies of the stored actors. Never fails.
    #[instrument(skip(self))]
    pub fn query(&self, query: &ActorQuery) -> Vec<Actor> {
        let result = query.apply(self.inner.iter());
        debug!(matched = result.len(), size = self.inner.len(), "Query");
        result
    }
}

impl Repository<Actor> for ActorsRepository {
    type Error = ActorError;

    fn inner(&self) -> &ResourceStore<Actor> {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut ResourceStore<Actor> {
        &mut self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        ActorError::from(e)
    }
}
