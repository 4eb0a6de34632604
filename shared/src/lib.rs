//! Shared types for the order draft
//!
//! Draft commands, events, snapshot and error codes used by the store and by
//! the UI hosts that embed it.

pub mod cart;
pub mod catalog;
pub mod util;

// Re-exports
pub use catalog::CatalogMeal;
pub use serde::{Deserialize, Serialize};
