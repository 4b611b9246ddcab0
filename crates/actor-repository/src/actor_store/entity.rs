//! StoreEntity trait implementation for the Actor domain type.
//!
//! This module contains the [`StoreEntity`] implementation that enables [`Actor`] to be
//! managed by the generic [`ResourceStore`](store_framework::ResourceStore).

use crate::model::{Actor, ActorCreate, ActorId, ActorUpdate};
use store_framework::StoreEntity;

impl StoreEntity for Actor {
    type Id = ActorId;
    type Create = ActorCreate;
    type Update = ActorUpdate;

    fn id(&self) -> ActorId {
        self.id
    }

    /// Creates a new Actor from creation parameters and the store-assigned id.
    fn from_create_params(id: ActorId, params: ActorCreate) -> Self {
        Self {
            id,
            name: params.name,
            birth_year: params.birth_year,
        }
    }

    /// Overwrites the mutable fields. The id is kept.
    ///
    /// # Fields Updated
    /// - `name`
    /// - `birth_year`
    fn on_update(&mut self, update: ActorUpdate) {
        self.name = update.name;
        self.birth_year = update.birth_year;
    }
}
