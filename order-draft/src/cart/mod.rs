//! Order draft module
//!
//! The draft is an event-sourced aggregate kept in memory and written through
//! to a snapshot store:
//!
//! - **actions**: command handlers, validate and emit events
//! - **appliers**: pure event → snapshot mutations
//! - **manager**: `CartManager`, the store the UI talks to
//! - **reducer**: replay and restore helpers
//! - **storage**: `SnapshotStore` trait, redb and in-memory stores
//! - **persist_worker**: background snapshot writer
//!
//! # Architecture
//!
//! ```text
//! CartCommand → CartManager → CartEvent → EventApplier → CartSnapshot
//!                    ↓                                        ↓
//!               Broadcast                     SnapshotStore (inline / PersistWorker)
//! ```

pub mod actions;
pub mod appliers;
pub mod manager;
pub mod money;
pub mod persist_worker;
pub mod reducer;
pub mod storage;
pub mod traits;

// Re-exports
pub use manager::{CartManager, DEFAULT_STORAGE_KEY, ManagerError, ManagerResult};
pub use persist_worker::PersistWorker;
pub use storage::{DraftStorage, MemoryStore, SnapshotStore, StorageError, StorageResult};
pub use traits::CartError;

// Re-export shared types for convenience
pub use shared::cart::{
    CartCommand, CartCommandPayload, CartEvent, CartEventType, CartSnapshot, CommandError,
    CommandErrorCode, CommandResponse, EventPayload, LineItem, LineKey,
};
