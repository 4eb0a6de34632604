//! Draft commands - requests from the UI to modify the draft

use super::types::LineItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Draft command envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartCommand {
    /// Command unique ID (for tracing events back to the request)
    pub command_id: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Command payload
    pub payload: CartCommandPayload,
}

impl CartCommand {
    pub fn new(payload: CartCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            timestamp: crate::util::now_millis(),
            payload,
        }
    }
}

/// Command payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartCommandPayload {
    /// Add servings; merges into an existing (meal, date) line
    AddItem { item: LineItem },
    /// Remove the (meal, date) line if present
    RemoveItem { meal_id: String, date: NaiveDate },
    /// Set the absolute quantity of an existing line
    UpdateQuantity {
        meal_id: String,
        date: NaiveDate,
        quantity: i32,
    },
    /// Drop every line
    ClearCart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_payload_is_tagged() {
        let cmd = CartCommand::new(CartCommandPayload::RemoveItem {
            meal_id: "chicken-bowl".to_string(),
            date: "2024-06-01".parse().unwrap(),
        });
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["payload"]["type"], "REMOVE_ITEM");
        assert_eq!(json["payload"]["date"], "2024-06-01");
        assert!(!cmd.command_id.is_empty());
    }
}
