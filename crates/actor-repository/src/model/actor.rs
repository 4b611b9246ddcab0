use serde::{Deserialize, Serialize};

/// Identifier assigned to an [`Actor`] by the store. Starts at 0.
pub type ActorId = u32;

/// A named individual with a birth year.
///
/// # Store Framework
/// This struct implements the [`StoreEntity`](store_framework::StoreEntity) trait,
/// allowing it to be managed by a [`ResourceStore`](store_framework::ResourceStore).
///
/// See [`impl StoreEntity for Actor`](#impl-StoreEntity-for-Actor) for details on:
/// - Creation parameters ([`ActorCreate`])
/// - Update parameters ([`ActorUpdate`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub birth_year: i32,
}

/// Payload for creating a new actor. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorCreate {
    pub name: String,
    pub birth_year: i32,
}

/// Replacement data for an existing actor. Both fields are overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorUpdate {
    pub name: String,
    pub birth_year: i32,
}

impl ActorCreate {
    pub fn new(name: impl Into<String>, birth_year: i32) -> Self {
        Self {
            name: name.into(),
            birth_year,
        }
    }
}

impl ActorUpdate {
    pub fn new(name: impl Into<String>, birth_year: i32) -> Self {
        Self {
            name: name.into(),
            birth_year,
        }
    }
}
