//! Event applier implementations
//!
//! Each applier implements the `EventApplier` trait and handles
//! one specific event type. Appliers are PURE functions.

use enum_dispatch::enum_dispatch;

use crate::cart::money;
use crate::cart::traits::EventApplier;
use shared::cart::{CartEvent, CartSnapshot, EventPayload};

mod cart_cleared;
mod item_added;
mod item_merged;
mod item_removed;
mod quantity_updated;

pub use cart_cleared::CartClearedApplier;
pub use item_added::ItemAddedApplier;
pub use item_merged::ItemMergedApplier;
pub use item_removed::ItemRemovedApplier;
pub use quantity_updated::QuantityUpdatedApplier;

/// EventAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(EventApplier)]
pub enum EventAction {
    ItemAdded(ItemAddedApplier),
    ItemMerged(ItemMergedApplier),
    ItemRemoved(ItemRemovedApplier),
    QuantityUpdated(QuantityUpdatedApplier),
    CartCleared(CartClearedApplier),
}

/// Convert CartEvent reference to EventAction
///
/// This is the ONLY place with a match on EventPayload.
impl From<&CartEvent> for EventAction {
    fn from(event: &CartEvent) -> Self {
        match &event.payload {
            EventPayload::ItemAdded { .. } => EventAction::ItemAdded(ItemAddedApplier),
            EventPayload::ItemMerged { .. } => EventAction::ItemMerged(ItemMergedApplier),
            EventPayload::ItemRemoved { .. } => EventAction::ItemRemoved(ItemRemovedApplier),
            EventPayload::QuantityUpdated { .. } => {
                EventAction::QuantityUpdated(QuantityUpdatedApplier)
            }
            EventPayload::CartCleared { .. } => EventAction::CartCleared(CartClearedApplier),
        }
    }
}

/// Bookkeeping shared by every applier once its mutation is done
pub(crate) fn finish_apply(snapshot: &mut CartSnapshot, event: &CartEvent) {
    snapshot.last_sequence = event.sequence;
    snapshot.updated_at = event.timestamp;
    money::recalculate_totals(snapshot);
}
