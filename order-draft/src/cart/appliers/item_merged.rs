//! ItemMerged event applier

use super::finish_apply;
use crate::cart::money::MAX_QUANTITY;
use crate::cart::traits::EventApplier;
use shared::cart::{CartEvent, CartSnapshot, EventPayload};

/// ItemMerged applier
pub struct ItemMergedApplier;

impl EventApplier for ItemMergedApplier {
    fn apply(&self, snapshot: &mut CartSnapshot, event: &CartEvent) {
        if let EventPayload::ItemMerged {
            key,
            added_quantity,
        } = &event.payload
        {
            match snapshot.find_mut(key) {
                Some(existing) => {
                    existing.quantity = existing
                        .quantity
                        .saturating_add(*added_quantity)
                        .min(MAX_QUANTITY);
                }
                None => tracing::warn!(key = %key, "ItemMerged for a line not in the draft"),
            }
            finish_apply(snapshot, event);
        }
    }
}
