//! Pure data structures (DTOs) for the Actor domain.

pub mod actor;
pub mod query;

pub use actor::*;
pub use query::*;
