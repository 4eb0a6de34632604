//! Draft state transitions
//!
//! - `apply_event` / `reduce`: snapshot + event → snapshot
//! - `replay`: rebuild a snapshot from an event stream
//! - `restore_snapshot`: rebuild a snapshot from persisted lines, enforcing
//!   the draft invariants on data that may have been written by another build

use super::appliers::EventAction;
use super::money::{self, MAX_QUANTITY};
use super::traits::EventApplier;
use shared::cart::{CartEvent, CartSnapshot, LineItem};
use tracing::warn;

/// Apply one event in place
pub fn apply_event(snapshot: &mut CartSnapshot, event: &CartEvent) {
    EventAction::from(event).apply(snapshot, event);
}

/// Apply one event to a copy of the snapshot
pub fn reduce(snapshot: &CartSnapshot, event: &CartEvent) -> CartSnapshot {
    let mut next = snapshot.clone();
    apply_event(&mut next, event);
    next
}

/// Rebuild a snapshot from an ordered event stream
pub fn replay<'a>(events: impl IntoIterator<Item = &'a CartEvent>) -> CartSnapshot {
    let mut snapshot = CartSnapshot::new();
    for event in events {
        apply_event(&mut snapshot, event);
    }
    snapshot
}

/// Rebuild a snapshot from persisted lines
///
/// Lines that fail validation are dropped, duplicate (meal, date) lines are
/// merged (capped at `MAX_QUANTITY`), and totals are recomputed.
pub fn restore_snapshot(items: Vec<LineItem>) -> CartSnapshot {
    let mut snapshot = CartSnapshot::new();
    let mut dropped = 0usize;
    let mut merged = 0usize;

    for item in items {
        if let Err(e) = money::validate_line_item(&item) {
            warn!(meal_id = %item.meal_id, date = %item.date, error = %e, "Dropping invalid persisted line");
            dropped += 1;
            continue;
        }
        match snapshot.find_mut(&item.key()) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .saturating_add(item.quantity)
                    .min(MAX_QUANTITY);
                merged += 1;
            }
            None => snapshot.items.push(item),
        }
    }

    if dropped > 0 || merged > 0 {
        warn!(dropped, merged, "Persisted draft normalized on restore");
    }

    money::recalculate_totals(&mut snapshot);
    snapshot
}
