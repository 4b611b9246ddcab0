//! # Generic In-Memory Store
//!
//! This module defines the `ResourceStore`, the component that owns a collection of
//! entities and assigns their ids. All operations are synchronous and run to completion;
//! mutations take `&mut self`, so a store has exactly one writer at a time.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tracing::{debug, info, warn};

/// The generic store that manages an ordered collection of entities.
///
/// # Implementation Details
///
/// The store keeps a `Vec` of entities in insertion order and a `u32` counter
/// (`next_id`) for id generation. The counter starts at 0 and only ever grows, so ids
/// are never reused, even after a delete. After `u32::MAX` has been assigned the
/// counter is spent and further creates fail instead of wrapping.
///
/// Reads hand out clones. A caller can do whatever it likes with a returned record
/// without touching the stored one; the only way to change stored state is
/// [`update`](Self::update).
///
/// ## Operations
///
/// * **Create**:
///     1. Takes `next_id` (or fails with `StoreError::IdsExhausted`) and advances the
///        counter with `checked_add`.
///     2. Calls `T::from_create_params` to instantiate the entity.
///     3. Appends it and returns a clone.
///
/// * **Get**: first entity with a matching id, cloned, or `None`.
///
/// * **Update**: calls the `on_update` hook on the matching entity and returns the
///   updated state, or `StoreError::NotFound`.
///
/// * **Delete**: removes the first matching entity and returns it, or
///   `StoreError::NotFound`. Order of the remaining entities is preserved.
#[derive(Debug, Clone)]
pub struct ResourceStore<T: StoreEntity> {
    items: Vec<T>,
    /// `None` once the last id has been assigned.
    next_id: Option<u32>,
}

impl<T: StoreEntity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> ResourceStore<T> {
    /// Creates an empty store whose first id will be 0.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty store with room for `capacity` entities before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        debug!(entity_type = entity_type::<T>(), capacity, "Store created");
        Self {
            items: Vec::with_capacity(capacity),
            next_id: Some(0),
        }
    }

    /// Every entity, in insertion order.
    pub fn list(&self) -> Vec<T> {
        debug!(entity_type = entity_type::<T>(), size = self.items.len(), "List");
        self.items.clone()
    }

    /// A clone of the entity with this id, or `None`.
    pub fn get(&self, id: T::Id) -> Option<T> {
        let item = self.find(id).cloned();
        let found = item.is_some();
        debug!(entity_type = entity_type::<T>(), %id, found, "Get");
        item
    }

    /// Assigns the next id, appends the new entity and returns a clone of it.
    ///
    /// Fails with [`StoreError::IdsExhausted`] only once every `u32` id has been handed
    /// out; ids are never reused.
    pub fn create(&mut self, params: T::Create) -> Result<T, StoreError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, ?params, "Create");
        let Some(raw_id) = self.next_id else {
            warn!(entity_type, size = self.items.len(), "Ids exhausted");
            return Err(StoreError::IdsExhausted);
        };
        self.next_id = raw_id.checked_add(1);
        let id = T::Id::from(raw_id);

        let item = T::from_create_params(id, params);
        self.items.push(item.clone());
        info!(entity_type, %id, size = self.items.len(), "Created");
        Ok(item)
    }

    /// Applies `update` to the entity with this id and returns its new state.
    pub fn update(&mut self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, ?update, "Update");
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.on_update(update);
                info!(entity_type, %id, "Updated");
                Ok(item.clone())
            }
            None => {
                warn!(entity_type, %id, "Not found");
                Err(StoreError::NotFound(id.to_string()))
            }
        }
    }

    /// Removes the entity with this id and returns it.
    pub fn delete(&mut self, id: T::Id) -> Result<T, StoreError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, "Delete");
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                let item = self.items.remove(index);
                info!(entity_type, %id, size = self.items.len(), "Deleted");
                Ok(item)
            }
            None => {
                warn!(entity_type, %id, "Not found");
                Err(StoreError::NotFound(id.to_string()))
            }
        }
    }

    /// Borrowing iterator over the stored entities, in insertion order.
    ///
    /// Meant for read-only scans such as filtering; callers clone what they keep.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Number of entities currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}

/// Short type name used as the `entity_type` log field
/// (e.g. "Actor" instead of "actor_repository::model::actor::Actor").
pub(crate) fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
    }

    impl StoreEntity for Counter {
        type Id = u32;
        type Create = ();
        type Update = ();

        fn id(&self) -> u32 {
            self.id
        }

        fn from_create_params(id: u32, _: ()) -> Self {
            Self { id }
        }

        fn on_update(&mut self, _: ()) {}
    }

    #[test]
    fn test_last_id_is_assigned_then_creates_fail() {
        let mut store = ResourceStore::<Counter>::new();
        store.next_id = Some(u32::MAX - 1);

        assert_eq!(store.create(()).unwrap().id, u32::MAX - 1);
        assert_eq!(store.create(()).unwrap().id, u32::MAX);
        assert_eq!(store.create(()), Err(StoreError::IdsExhausted));
        assert_eq!(store.create(()), Err(StoreError::IdsExhausted));

        // Nothing was appended or reused by the failed creates.
        let ids: Vec<u32> = store.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![u32::MAX - 1, u32::MAX]);
    }

    #[test]
    fn test_ids_exhausted_does_not_block_other_operations() {
        let mut store = ResourceStore::<Counter>::new();
        store.next_id = Some(u32::MAX);
        let last = store.create(()).unwrap();
        assert!(store.create(()).is_err());

        assert_eq!(store.get(last.id), Some(last.clone()));
        assert_eq!(store.update(last.id, ()), Ok(last.clone()));
        assert_eq!(store.delete(last.id), Ok(last));
        assert!(store.is_empty());
    }
}
