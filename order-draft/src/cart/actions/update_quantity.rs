//! UpdateQuantity command handler
//!
//! Sets an absolute quantity. Non-positive values are rejected; deleting a
//! line requires RemoveItem. Updating an absent pair produces no events.

use crate::cart::money;
use crate::cart::traits::{CartError, CommandContext, CommandHandler, CommandMetadata};
use chrono::NaiveDate;
use shared::cart::{CartEvent, EventPayload};

/// UpdateQuantity action
#[derive(Debug, Clone)]
pub struct UpdateQuantityAction {
    pub meal_id: String,
    pub date: NaiveDate,
    pub quantity: i32,
}

impl CommandHandler for UpdateQuantityAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<CartEvent>, CartError> {
        money::validate_quantity(self.quantity)?;

        let Some(item) = ctx.snapshot().find(&self.meal_id, self.date) else {
            tracing::debug!(meal_id = %self.meal_id, date = %self.date, "Update of absent line ignored");
            return Ok(vec![]);
        };
        if item.quantity == self.quantity {
            return Ok(vec![]);
        }
        let key = item.key();

        let seq = ctx.next_sequence();
        Ok(vec![CartEvent::new(
            seq,
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            EventPayload::QuantityUpdated {
                key,
                quantity: self.quantity,
            },
        )])
    }
}
