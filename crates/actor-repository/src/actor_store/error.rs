//! Error types for the Actor store.

use store_framework::StoreError;
use thiserror::Error;

/// Errors that can occur during actor operations.
///
/// Only mutations fail. Reads report absence as `None` or an empty list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActorError {
    /// Delete or update targeted an id the store does not hold.
    #[error("Actor with ID {0} not found.")]
    NotFound(String),

    /// Every actor id has been assigned; adding another would reuse one.
    #[error("No actor ids left to assign.")]
    IdsExhausted,
}

impl From<StoreError> for ActorError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ActorError::NotFound(id),
            StoreError::IdsExhausted => ActorError::IdsExhausted,
        }
    }
}
