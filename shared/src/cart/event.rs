//! Draft events - facts produced by commands and applied to the snapshot

use super::types::{LineItem, LineKey};
use serde::{Deserialize, Serialize};

/// Draft event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartEvent {
    /// Event unique ID
    pub event_id: String,
    /// Per-session sequence number (ordering for replay)
    pub sequence: u64,
    /// Store timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Client timestamp from the originating command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_timestamp: Option<i64>,
    /// Command that triggered this event
    pub command_id: String,
    /// Event type
    pub event_type: CartEventType,
    /// Event payload
    pub payload: EventPayload,
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartEventType {
    ItemAdded,
    ItemMerged,
    ItemRemoved,
    QuantityUpdated,
    CartCleared,
}

impl std::fmt::Display for CartEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartEventType::ItemAdded => write!(f, "ITEM_ADDED"),
            CartEventType::ItemMerged => write!(f, "ITEM_MERGED"),
            CartEventType::ItemRemoved => write!(f, "ITEM_REMOVED"),
            CartEventType::QuantityUpdated => write!(f, "QUANTITY_UPDATED"),
            CartEventType::CartCleared => write!(f, "CART_CLEARED"),
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    /// A new line was appended
    ItemAdded { item: LineItem },
    /// Servings were accumulated onto an existing line
    ItemMerged { key: LineKey, added_quantity: i32 },
    /// A line was removed
    ItemRemoved { key: LineKey },
    /// A line's quantity was set to an absolute value
    QuantityUpdated { key: LineKey, quantity: i32 },
    /// Every line was dropped
    CartCleared { removed_lines: usize },
}

impl EventPayload {
    pub fn event_type(&self) -> CartEventType {
        match self {
            EventPayload::ItemAdded { .. } => CartEventType::ItemAdded,
            EventPayload::ItemMerged { .. } => CartEventType::ItemMerged,
            EventPayload::ItemRemoved { .. } => CartEventType::ItemRemoved,
            EventPayload::QuantityUpdated { .. } => CartEventType::QuantityUpdated,
            EventPayload::CartCleared { .. } => CartEventType::CartCleared,
        }
    }
}

impl CartEvent {
    /// Create a new event
    pub fn new(
        sequence: u64,
        command_id: String,
        client_timestamp: Option<i64>,
        payload: EventPayload,
    ) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            sequence,
            timestamp: crate::util::now_millis(),
            client_timestamp,
            command_id,
            event_type: payload.event_type(),
            payload,
        }
    }
}
