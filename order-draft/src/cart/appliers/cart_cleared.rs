//! CartCleared event applier

use super::finish_apply;
use crate::cart::traits::EventApplier;
use shared::cart::{CartEvent, CartSnapshot, EventPayload};

/// CartCleared applier
pub struct CartClearedApplier;

impl EventApplier for CartClearedApplier {
    fn apply(&self, snapshot: &mut CartSnapshot, event: &CartEvent) {
        if let EventPayload::CartCleared { .. } = &event.payload {
            snapshot.items.clear();
            finish_apply(snapshot, event);
        }
    }
}
