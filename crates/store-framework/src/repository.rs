//! # Repository Trait
//!
//! Provides a common interface for domain repositories, adding default `list`, `get` and
//! `delete` methods built on top of a generic [`ResourceStore`].
use crate::{ResourceStore, StoreEntity, StoreError};

/// Trait for domain-specific repositories to inherit standard read and delete operations.
///
/// Implementors own a [`ResourceStore`] and translate [`StoreError`] into their own
/// error type. Operations whose payload needs domain-specific handling (create, update,
/// queries) stay on the implementing type.
///
/// # Example
///
/// ```rust
/// use store_framework::{Repository, ResourceStore, StoreEntity, StoreError};
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagCreate(String);
/// #[derive(Debug)] struct TagUpdate(String);
///
/// impl StoreEntity for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = TagUpdate;
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(id: u32, params: TagCreate) -> Self { Self { id, label: params.0 } }
///     fn on_update(&mut self, update: TagUpdate) { self.label = update.0; }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tag {0} missing")]
/// struct TagError(String);
///
/// struct TagRepository { inner: ResourceStore<Tag> }
///
/// impl Repository<Tag> for TagRepository {
///     type Error = TagError;
///     fn inner(&self) -> &ResourceStore<Tag> { &self.inner }
///     fn inner_mut(&mut self) -> &mut ResourceStore<Tag> { &mut self.inner }
///     fn map_error(e: StoreError) -> TagError { TagError(e.to_string()) }
/// }
///
/// let mut repo = TagRepository { inner: ResourceStore::new() };
/// // list(), get() and delete() are provided automatically!
/// assert!(repo.list().is_empty());
/// assert!(repo.get(3).is_none());
/// assert!(repo.delete(3).is_err());
/// ```
pub trait Repository<T: StoreEntity> {
    /// The domain-specific error type.
    type Error: std::error::Error;

    /// Access the inner generic store.
    fn inner(&self) -> &ResourceStore<T>;

    /// Mutable access to the inner generic store.
    fn inner_mut(&mut self) -> &mut ResourceStore<T>;

    /// Map store errors to the domain error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Every record, in insertion order. Empty store gives an empty `Vec`.
    #[tracing::instrument(skip(self))]
    fn list(&self) -> Vec<T> {
        self.inner().list()
    }

    /// Fetch a record by id. A missing id is `None`, not an error.
    #[tracing::instrument(skip(self))]
    fn get(&self, id: T::Id) -> Option<T> {
        self.inner().get(id)
    }

    /// Remove a record by id and return it.
    #[tracing::instrument(skip(self))]
    fn delete(&mut self, id: T::Id) -> Result<T, Self::Error> {
        self.inner_mut().delete(id).map_err(Self::map_error)
    }
}
