//! QuantityUpdated event applier

use super::finish_apply;
use crate::cart::traits::EventApplier;
use shared::cart::{CartEvent, CartSnapshot, EventPayload};

/// QuantityUpdated applier
pub struct QuantityUpdatedApplier;

impl EventApplier for QuantityUpdatedApplier {
    fn apply(&self, snapshot: &mut CartSnapshot, event: &CartEvent) {
        if let EventPayload::QuantityUpdated { key, quantity } = &event.payload {
            if let Some(existing) = snapshot.find_mut(key) {
                existing.quantity = *quantity;
            }
            finish_apply(snapshot, event);
        }
    }
}
