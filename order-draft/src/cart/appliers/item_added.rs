//! ItemAdded event applier

use super::finish_apply;
use crate::cart::money::MAX_QUANTITY;
use crate::cart::traits::EventApplier;
use shared::cart::{CartEvent, CartSnapshot, EventPayload, LineItem};

/// ItemAdded applier
pub struct ItemAddedApplier;

impl EventApplier for ItemAddedApplier {
    fn apply(&self, snapshot: &mut CartSnapshot, event: &CartEvent) {
        if let EventPayload::ItemAdded { item } = &event.payload {
            add_or_merge_item(snapshot, item);
            finish_apply(snapshot, event);
        }
    }
}

/// Append the line, merging into an existing (meal, date) line if one exists
///
/// Replayed or restored events may carry a pair that is already present;
/// merging keeps the key unique.
pub(crate) fn add_or_merge_item(snapshot: &mut CartSnapshot, item: &LineItem) {
    if let Some(existing) = snapshot.find_mut(&item.key()) {
        existing.quantity = existing
            .quantity
            .saturating_add(item.quantity)
            .min(MAX_QUANTITY);
    } else {
        snapshot.items.push(item.clone());
    }
}
