//! Command and event traits for the draft state machine
//!
//! - `CommandHandler`: validates a command against the current snapshot and
//!   produces events. Never mutates state.
//! - `EventApplier`: applies one event to a snapshot. Pure, infallible.

use super::appliers::{
    CartClearedApplier, EventAction, ItemAddedApplier, ItemMergedApplier, ItemRemovedApplier,
    QuantityUpdatedApplier,
};
use enum_dispatch::enum_dispatch;
use shared::cart::{CartEvent, CartSnapshot};
use thiserror::Error;

/// Action-level errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("Meal unavailable: {0}")]
    MealUnavailable(String),
}

/// Metadata carried from the originating command into its events
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    pub timestamp: i64,
}

impl CommandMetadata {
    /// Metadata for calls that bypass the command envelope
    pub fn generate() -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            timestamp: shared::util::now_millis(),
        }
    }
}

/// Read-only view of the draft handed to actions, plus sequence allocation
pub struct CommandContext<'a> {
    snapshot: &'a CartSnapshot,
    sequence: u64,
}

impl<'a> CommandContext<'a> {
    pub fn new(snapshot: &'a CartSnapshot) -> Self {
        Self {
            snapshot,
            sequence: snapshot.last_sequence,
        }
    }

    pub fn snapshot(&self) -> &CartSnapshot {
        self.snapshot
    }

    /// Allocate the next event sequence
    pub fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }
}

/// Command handler - one implementation per command type
pub trait CommandHandler {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<CartEvent>, CartError>;
}

/// Event applier - one implementation per event type
#[enum_dispatch]
pub trait EventApplier {
    fn apply(&self, snapshot: &mut CartSnapshot, event: &CartEvent);
}
