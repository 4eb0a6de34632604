//! Persist Worker - writes draft snapshots off the mutation path
//!
//! The manager sends the full line list after every change. The worker keeps
//! only the newest queued snapshot, writes it, and exits once every sender
//! is dropped (after writing whatever was still queued).
//!
//! Note: redb operations are synchronous; a single write is small.

use super::storage::{SnapshotStore, encode_items};
use shared::cart::LineItem;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Sending half handed to the manager
pub type SnapshotSender = mpsc::UnboundedSender<Vec<LineItem>>;
/// Receiving half consumed by the worker
pub type SnapshotReceiver = mpsc::UnboundedReceiver<Vec<LineItem>>;

/// Create the snapshot channel
pub fn snapshot_channel() -> (SnapshotSender, SnapshotReceiver) {
    mpsc::unbounded_channel()
}

/// Worker writing the latest snapshot to a `SnapshotStore`
pub struct PersistWorker {
    store: Arc<dyn SnapshotStore>,
    key: String,
}

impl PersistWorker {
    pub fn new(store: Arc<dyn SnapshotStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Run until the channel closes
    pub async fn run(self, mut rx: SnapshotReceiver) {
        tracing::info!(key = %self.key, "PersistWorker started");

        let mut written: u64 = 0;
        let mut coalesced: u64 = 0;

        while let Some(mut items) = rx.recv().await {
            // Only the newest snapshot matters
            while let Ok(newer) = rx.try_recv() {
                items = newer;
                coalesced += 1;
            }
            if self.persist(&items) {
                written += 1;
            }
        }

        tracing::info!(written, coalesced, "Snapshot channel closed, PersistWorker stopped");
    }

    fn persist(&self, items: &[LineItem]) -> bool {
        let result = encode_items(items).and_then(|bytes| self.store.save(&self.key, &bytes));
        match result {
            Ok(()) => {
                tracing::debug!(key = %self.key, lines = items.len(), "Draft snapshot persisted");
                true
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to persist draft snapshot, keeping in-memory state");
                false
            }
        }
    }
}
