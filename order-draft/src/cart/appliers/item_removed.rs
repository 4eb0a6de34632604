//! ItemRemoved event applier

use super::finish_apply;
use crate::cart::traits::EventApplier;
use shared::cart::{CartEvent, CartSnapshot, EventPayload};

/// ItemRemoved applier
pub struct ItemRemovedApplier;

impl EventApplier for ItemRemovedApplier {
    fn apply(&self, snapshot: &mut CartSnapshot, event: &CartEvent) {
        if let EventPayload::ItemRemoved { key } = &event.payload {
            if let Some(idx) = snapshot.position(key) {
                snapshot.items.remove(idx);
            }
            finish_apply(snapshot, event);
        }
    }
}
