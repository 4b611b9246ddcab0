//! # Store Errors
//!
//! Errors raised by the generic store. Domain crates map these into their own error
//! enums through [`Repository::map_error`](crate::Repository::map_error).

/// Errors that can occur within the store itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A mutating operation targeted an id the store does not hold.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Every id has been assigned; the store will not reuse one.
    #[error("Id space exhausted")]
    IdsExhausted,
}
