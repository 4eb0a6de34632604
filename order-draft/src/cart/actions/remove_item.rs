//! RemoveItem command handler
//!
//! Removing a pair that is not in the draft produces no events.

use crate::cart::traits::{CartError, CommandContext, CommandHandler, CommandMetadata};
use chrono::NaiveDate;
use shared::cart::{CartEvent, EventPayload};

/// RemoveItem action
#[derive(Debug, Clone)]
pub struct RemoveItemAction {
    pub meal_id: String,
    pub date: NaiveDate,
}

impl CommandHandler for RemoveItemAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<CartEvent>, CartError> {
        let Some(item) = ctx.snapshot().find(&self.meal_id, self.date) else {
            tracing::debug!(meal_id = %self.meal_id, date = %self.date, "Remove of absent line ignored");
            return Ok(vec![]);
        };
        let key = item.key();

        let seq = ctx.next_sequence();
        Ok(vec![CartEvent::new(
            seq,
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            EventPayload::ItemRemoved { key },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::cart::{CartEventType, CartSnapshot, LineItem};

    fn metadata() -> CommandMetadata {
        CommandMetadata {
            command_id: "cmd-1".to_string(),
            timestamp: 1234567890,
        }
    }

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_remove_existing_line() {
        let snapshot = CartSnapshot::with_items(vec![LineItem::new(
            "chicken-bowl",
            "Chicken Bowl",
            june(1),
            3,
            12.5,
        )]);
        let mut ctx = CommandContext::new(&snapshot);

        let action = RemoveItemAction {
            meal_id: "chicken-bowl".to_string(),
            date: june(1),
        };
        let events = action.execute(&mut ctx, &metadata()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, CartEventType::ItemRemoved);
    }

    #[test]
    fn test_remove_non_matching_date_is_noop() {
        let snapshot = CartSnapshot::with_items(vec![LineItem::new(
            "chicken-bowl",
            "Chicken Bowl",
            june(1),
            3,
            12.5,
        )]);
        let mut ctx = CommandContext::new(&snapshot);

        let action = RemoveItemAction {
            meal_id: "chicken-bowl".to_string(),
            date: june(2),
        };
        let events = action.execute(&mut ctx, &metadata()).unwrap();
        assert!(events.is_empty());
    }
}
