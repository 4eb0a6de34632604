//! Draft snapshot - the aggregate state computed from applied events
//!
//! `total_items` and `total_price` are derived from `items` and recomputed
//! after every event; they are never read back from storage.

use super::types::{LineItem, LineKey};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order draft snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartSnapshot {
    /// Lines in insertion order (display order only)
    pub items: Vec<LineItem>,
    /// Sum of quantities
    pub total_items: i64,
    /// Sum of quantity * unit_price, rounded to cents
    pub total_price: f64,
    /// Last applied event sequence
    pub last_sequence: u64,
    /// Last update timestamp (Unix milliseconds)
    pub updated_at: i64,
}

impl CartSnapshot {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a draft from restored lines (totals are left at zero for the caller to compute)
    pub fn with_items(items: Vec<LineItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, meal_id: &str, date: NaiveDate) -> Option<&LineItem> {
        self.items.iter().find(|i| i.matches(meal_id, date))
    }

    pub fn find_mut(&mut self, key: &LineKey) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|i| i.matches(&key.meal_id, key.date))
    }

    pub fn position(&self, key: &LineKey) -> Option<usize> {
        self.items
            .iter()
            .position(|i| i.matches(&key.meal_id, key.date))
    }
}
