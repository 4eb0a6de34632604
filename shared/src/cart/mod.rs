//! Order draft module
//!
//! Types for the event-driven order draft:
//! - Commands: requests from the UI to modify the draft
//! - Events: facts produced by command processing
//! - Snapshot: draft state computed by applying events

pub mod command;
pub mod event;
pub mod snapshot;
pub mod types;

// Re-exports
pub use command::{CartCommand, CartCommandPayload};
pub use event::{CartEvent, CartEventType, EventPayload};
pub use snapshot::CartSnapshot;
pub use types::*;
