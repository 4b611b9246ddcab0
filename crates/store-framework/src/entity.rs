//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every record type must satisfy to be kept in a
//! generic [`ResourceStore`](crate::ResourceStore). It names the id and DTO types of the
//! entity and the two hooks the store calls: construction from a create payload and
//! in-place update.
//!
//! # Architecture Note
//! The store logic (id assignment, ordering, lookup, not-found handling) is written *once*
//! against this trait. An `Actor` needs an `ActorCreate` payload, and the compiler will not
//! let you hand it anything else.

use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by [`ResourceStore`](crate::ResourceStore).
///
/// # Example
///
/// ```rust
/// use store_framework::{ResourceStore, StoreEntity};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagCreate { label: String }
/// #[derive(Debug)] struct TagUpdate { label: String }
///
/// impl StoreEntity for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = TagUpdate;
///
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(id: u32, params: TagCreate) -> Self {
///         Self { id, label: params.label }
///     }
///     fn on_update(&mut self, update: TagUpdate) { self.label = update.label; }
/// }
///
/// let mut store = ResourceStore::<Tag>::new();
/// let tag = store.create(TagCreate { label: "rust".into() }).unwrap();
/// assert_eq!(tag.id, 0);
/// assert_eq!(store.get(0), Some(tag));
/// ```
pub trait StoreEntity: Clone + Debug {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Copy + Eq + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Debug;

    /// The data required to update an existing instance.
    type Update: Debug;

    /// The identifier assigned to this record by the store.
    fn id(&self) -> Self::Id;

    /// Construct the full entity from the assigned id and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Self;

    /// Apply an update in place. The id must not change.
    fn on_update(&mut self, update: Self::Update);
}
