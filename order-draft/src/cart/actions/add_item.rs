//! AddItem command handler
//!
//! Appends a new line or accumulates servings onto the existing
//! (meal, date) line. Name and price of a later add are ignored.

use crate::cart::money::{self, MAX_QUANTITY};
use crate::cart::traits::{CartError, CommandContext, CommandHandler, CommandMetadata};
use shared::cart::{CartEvent, EventPayload, LineItem};

/// AddItem action
#[derive(Debug, Clone)]
pub struct AddItemAction {
    pub item: LineItem,
}

impl CommandHandler for AddItemAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<CartEvent>, CartError> {
        // 1. Validate input
        money::validate_line_item(&self.item)?;

        // 2. Merge or append
        let payload = match ctx.snapshot().find(&self.item.meal_id, self.item.date) {
            Some(existing) => {
                let merged = i64::from(existing.quantity) + i64::from(self.item.quantity);
                if merged > i64::from(MAX_QUANTITY) {
                    return Err(CartError::InvalidQuantity(format!(
                        "quantity exceeds maximum allowed ({}) after merge, got {}",
                        MAX_QUANTITY, merged
                    )));
                }
                EventPayload::ItemMerged {
                    key: existing.key(),
                    added_quantity: self.item.quantity,
                }
            }
            None => EventPayload::ItemAdded {
                item: self.item.clone(),
            },
        };

        // 3. Create event
        let seq = ctx.next_sequence();
        Ok(vec![CartEvent::new(
            seq,
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            payload,
        )])
    }
}
