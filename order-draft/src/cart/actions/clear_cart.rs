//! ClearCart command handler

use crate::cart::traits::{CartError, CommandContext, CommandHandler, CommandMetadata};
use shared::cart::{CartEvent, EventPayload};

/// ClearCart action
#[derive(Debug, Clone, Default)]
pub struct ClearCartAction;

impl CommandHandler for ClearCartAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<CartEvent>, CartError> {
        let removed_lines = ctx.snapshot().items.len();
        let seq = ctx.next_sequence();
        Ok(vec![CartEvent::new(
            seq,
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            EventPayload::CartCleared { removed_lines },
        )])
    }
}
