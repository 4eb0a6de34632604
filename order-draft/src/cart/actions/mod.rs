//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type.

use crate::cart::traits::{CartError, CommandContext, CommandHandler, CommandMetadata};
use shared::cart::{CartCommand, CartCommandPayload, CartEvent};

mod add_item;
mod clear_cart;
mod remove_item;
mod update_quantity;

pub use add_item::AddItemAction;
pub use clear_cart::ClearCartAction;
pub use remove_item::RemoveItemAction;
pub use update_quantity::UpdateQuantityAction;

/// CommandAction enum - dispatches to concrete action implementations
#[derive(Debug, Clone)]
pub enum CommandAction {
    AddItem(AddItemAction),
    RemoveItem(RemoveItemAction),
    UpdateQuantity(UpdateQuantityAction),
    ClearCart(ClearCartAction),
}

impl CommandHandler for CommandAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<CartEvent>, CartError> {
        match self {
            CommandAction::AddItem(action) => action.execute(ctx, metadata),
            CommandAction::RemoveItem(action) => action.execute(ctx, metadata),
            CommandAction::UpdateQuantity(action) => action.execute(ctx, metadata),
            CommandAction::ClearCart(action) => action.execute(ctx, metadata),
        }
    }
}

/// Convert CartCommand to CommandAction
///
/// This is the ONLY place with a match on CartCommandPayload.
impl From<&CartCommand> for CommandAction {
    fn from(cmd: &CartCommand) -> Self {
        match &cmd.payload {
            CartCommandPayload::AddItem { item } => {
                CommandAction::AddItem(AddItemAction { item: item.clone() })
            }
            CartCommandPayload::RemoveItem { meal_id, date } => {
                CommandAction::RemoveItem(RemoveItemAction {
                    meal_id: meal_id.clone(),
                    date: *date,
                })
            }
            CartCommandPayload::UpdateQuantity {
                meal_id,
                date,
                quantity,
            } => CommandAction::UpdateQuantity(UpdateQuantityAction {
                meal_id: meal_id.clone(),
                date: *date,
                quantity: *quantity,
            }),
            CartCommandPayload::ClearCart => CommandAction::ClearCart(ClearCartAction),
        }
    }
}
