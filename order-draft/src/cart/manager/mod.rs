//! CartManager - the order draft store
//!
//! This module handles:
//! - Draft restore on startup (exactly one snapshot read)
//! - Command validation and event generation
//! - Applying events to the in-memory snapshot
//! - Write-through snapshot persistence (inline or via `PersistWorker`)
//! - Event broadcasting to UI subscribers
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Convert command to action
//!     ├─ 2. Lock snapshot, create CommandContext
//!     ├─ 3. Execute action → events (empty for no-ops)
//!     ├─ 4. Apply events via EventApplier
//!     ├─ 5. Hand line items to the persister
//!     ├─ 6. Broadcast event(s)
//!     └─ 7. Return response
//! ```
//!
//! The in-memory snapshot is the source of truth. Persistence failures are
//! logged and never undo or fail a mutation.

mod error;
pub use error::*;

#[cfg(test)]
mod tests;

use super::actions::{
    AddItemAction, ClearCartAction, CommandAction, RemoveItemAction, UpdateQuantityAction,
};
use super::persist_worker::{PersistWorker, SnapshotSender, snapshot_channel};
use super::reducer;
use super::storage::{
    DraftStorage, MemoryStore, SnapshotStore, StorageError, StorageResult, decode_items,
    encode_items,
};
use super::traits::{CommandContext, CommandHandler, CommandMetadata};
use crate::catalog::CatalogLookup;
use crate::core::{Config, PersistMode};
use chrono::NaiveDate;
use parking_lot::Mutex;
use shared::cart::{CartCommand, CartEvent, CartSnapshot, CommandResponse, LineItem};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Default key the draft snapshot is stored under
pub const DEFAULT_STORAGE_KEY: &str = "order-draft";

/// Where snapshots go after each change
enum Persister {
    Inline(Arc<dyn SnapshotStore>),
    Background(SnapshotSender),
}

/// The order draft store
pub struct CartManager {
    snapshot: Mutex<CartSnapshot>,
    persister: Persister,
    storage_key: String,
    event_tx: broadcast::Sender<CartEvent>,
    catalog: Option<Arc<dyn CatalogLookup>>,
}

impl std::fmt::Debug for CartManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match self.persister {
            Persister::Inline(_) => "inline",
            Persister::Background(_) => "background",
        };
        f.debug_struct("CartManager")
            .field("storage_key", &self.storage_key)
            .field("persist_mode", &mode)
            .field("snapshot", &*self.snapshot.lock())
            .finish()
    }
}

impl CartManager {
    /// Restore the draft from `store`, persisting inline on every change
    pub fn restore(store: Arc<dyn SnapshotStore>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let snapshot = load_snapshot(store.as_ref(), &storage_key);
        Self::with_parts(snapshot, Persister::Inline(store), storage_key)
    }

    /// Restore the draft from `store`, persisting through a spawned `PersistWorker`
    ///
    /// Must be called inside a tokio runtime. Dropping the manager closes the
    /// channel; the worker writes the last queued snapshot and the returned
    /// handle completes.
    pub fn restore_with_worker(
        store: Arc<dyn SnapshotStore>,
        storage_key: impl Into<String>,
    ) -> (Self, JoinHandle<()>) {
        let storage_key = storage_key.into();
        let snapshot = load_snapshot(store.as_ref(), &storage_key);
        let (tx, rx) = snapshot_channel();
        let worker = PersistWorker::new(store, storage_key.clone());
        let handle = tokio::spawn(worker.run(rx));
        (
            Self::with_parts(snapshot, Persister::Background(tx), storage_key),
            handle,
        )
    }

    /// Build the store described by `config`
    ///
    /// Never fails: if the database cannot be opened the draft lives in an
    /// in-process store for this session. Background mode without a tokio
    /// runtime falls back to inline persistence.
    pub fn from_config(config: &Config) -> (Self, Option<JoinHandle<()>>) {
        let store: Arc<dyn SnapshotStore> = match open_storage(config) {
            Ok(storage) => Arc::new(storage),
            Err(e) => {
                tracing::error!(
                    path = %config.db_path().display(),
                    error = %e,
                    "Draft database unavailable, draft will not survive restart"
                );
                Arc::new(MemoryStore::new())
            }
        };

        if config.persist_mode == PersistMode::Background {
            if tokio::runtime::Handle::try_current().is_ok() {
                let (manager, handle) = Self::restore_with_worker(store, &config.storage_key);
                return (manager, Some(handle));
            }
            tracing::warn!("No tokio runtime available, using inline persistence");
        }

        (Self::restore(store, &config.storage_key), None)
    }

    fn with_parts(snapshot: CartSnapshot, persister: Persister, storage_key: String) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            snapshot: Mutex::new(snapshot),
            persister,
            storage_key,
            event_tx,
            catalog: None,
        }
    }

    /// Set the catalog used by `add_meal`
    pub fn set_catalog(&mut self, catalog: Arc<dyn CatalogLookup>) {
        self.catalog = Some(catalog);
    }

    /// Subscribe to event broadcasts
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.event_tx.subscribe()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // ========== Mutations ==========

    /// Add servings of a meal for a delivery date
    ///
    /// An existing (meal, date) line gets `quantity` added to it; its name
    /// and price stay as first captured.
    pub fn add_item(&self, item: LineItem) -> ManagerResult<()> {
        self.run(CommandAction::AddItem(AddItemAction { item }))
    }

    /// Add servings of a catalog meal, capturing its current name and price
    pub fn add_meal(&self, meal_id: &str, date: NaiveDate, quantity: i32) -> ManagerResult<()> {
        let catalog = self
            .catalog
            .as_ref()
            .ok_or(ManagerError::CatalogUnavailable)?;
        let meal = catalog
            .meal(meal_id)
            .ok_or_else(|| ManagerError::MealNotFound(meal_id.to_string()))?;
        if !meal.is_available {
            return Err(ManagerError::MealUnavailable(meal_id.to_string()));
        }
        self.add_item(LineItem::new(
            meal.meal_id,
            meal.name,
            date,
            quantity,
            meal.price,
        ))
    }

    /// Remove the (meal, date) line; absent pairs are ignored
    pub fn remove_item(&self, meal_id: &str, date: NaiveDate) -> ManagerResult<()> {
        self.run(CommandAction::RemoveItem(RemoveItemAction {
            meal_id: meal_id.to_string(),
            date,
        }))
    }

    /// Set the absolute quantity of an existing line
    ///
    /// `quantity < 1` is rejected with `InvalidQuantity`; use `remove_item`
    /// to delete. Absent pairs are ignored.
    pub fn update_quantity(
        &self,
        meal_id: &str,
        date: NaiveDate,
        quantity: i32,
    ) -> ManagerResult<()> {
        self.run(CommandAction::UpdateQuantity(UpdateQuantityAction {
            meal_id: meal_id.to_string(),
            date,
            quantity,
        }))
    }

    /// Empty the draft
    pub fn clear_cart(&self) {
        if let Err(e) = self.run(CommandAction::ClearCart(ClearCartAction)) {
            tracing::error!(error = %e, "Clearing the draft failed");
        }
    }

    /// Execute a command and return the response
    pub fn execute_command(&self, cmd: CartCommand) -> CommandResponse {
        self.execute_command_with_events(cmd).0
    }

    /// Execute a command and return both the response and generated events
    pub fn execute_command_with_events(
        &self,
        cmd: CartCommand,
    ) -> (CommandResponse, Vec<CartEvent>) {
        tracing::debug!(command_id = %cmd.command_id, payload = ?cmd.payload, "Processing command");

        let action = CommandAction::from(&cmd);
        let metadata = CommandMetadata {
            command_id: cmd.command_id.clone(),
            timestamp: cmd.timestamp,
        };

        match self.process(action, &metadata) {
            Ok(events) => (CommandResponse::success(cmd.command_id), events),
            Err(err) => {
                tracing::debug!(command_id = %cmd.command_id, error = %err, "Command rejected");
                (CommandResponse::error(cmd.command_id, err.into()), vec![])
            }
        }
    }

    fn run(&self, action: CommandAction) -> ManagerResult<()> {
        self.process(action, &CommandMetadata::generate()).map(|_| ())
    }

    /// Validate, apply, persist, broadcast
    fn process(
        &self,
        action: CommandAction,
        metadata: &CommandMetadata,
    ) -> ManagerResult<Vec<CartEvent>> {
        let events = {
            let mut snapshot = self.snapshot.lock();

            let events = {
                let mut ctx = CommandContext::new(&snapshot);
                action.execute(&mut ctx, metadata)?
            };
            if events.is_empty() {
                return Ok(events);
            }

            for event in &events {
                reducer::apply_event(&mut snapshot, event);
            }

            // Persist under the lock so snapshots reach the store in order
            self.persist(snapshot.items.clone());
            events
        };

        for event in &events {
            if self.event_tx.send(event.clone()).is_err() {
                tracing::trace!("Event broadcast skipped: no active receivers");
                break;
            }
        }

        Ok(events)
    }

    fn persist(&self, items: Vec<LineItem>) {
        match &self.persister {
            Persister::Inline(store) => {
                if let Err(e) = save_items(store.as_ref(), &self.storage_key, &items) {
                    tracing::warn!(key = %self.storage_key, error = %e, "Draft change not persisted, keeping in-memory state");
                }
            }
            Persister::Background(tx) => {
                if tx.send(items).is_err() {
                    tracing::warn!(key = %self.storage_key, "PersistWorker stopped, draft change not persisted");
                }
            }
        }
    }

    // ========== Reads ==========

    /// Copy of the whole draft
    pub fn snapshot(&self) -> CartSnapshot {
        self.snapshot.lock().clone()
    }

    /// Copy of the line items in display order
    pub fn items(&self) -> Vec<LineItem> {
        self.snapshot.lock().items.clone()
    }

    /// The (meal, date) line, if present
    pub fn find_item(&self, meal_id: &str, date: NaiveDate) -> Option<LineItem> {
        self.snapshot.lock().find(meal_id, date).cloned()
    }

    /// Sum of quantities
    pub fn total_items(&self) -> i64 {
        self.snapshot.lock().total_items
    }

    /// Sum of quantity * unit_price
    pub fn total_price(&self) -> f64 {
        self.snapshot.lock().total_price
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.lock().is_empty()
    }
}

fn open_storage(config: &Config) -> StorageResult<DraftStorage> {
    std::fs::create_dir_all(&config.work_dir).map_err(|e| {
        StorageError::Unavailable(format!("cannot create {}: {}", config.work_dir, e))
    })?;
    DraftStorage::open(config.db_path())
}

fn save_items(store: &dyn SnapshotStore, key: &str, items: &[LineItem]) -> ManagerResult<()> {
    let bytes = encode_items(items)?;
    store.save(key, &bytes)?;
    Ok(())
}

/// The single startup read; any failure yields an empty draft
fn load_snapshot(store: &dyn SnapshotStore, key: &str) -> CartSnapshot {
    let bytes = match store.load(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            tracing::info!(key = %key, "No persisted draft, starting empty");
            return CartSnapshot::new();
        }
        Err(e) => {
            let err = ManagerError::from(e);
            tracing::warn!(key = %key, error = %err, "Draft restore failed, starting empty");
            return CartSnapshot::new();
        }
    };

    match decode_items(&bytes) {
        Ok(items) => {
            let snapshot = reducer::restore_snapshot(items);
            tracing::info!(
                key = %key,
                lines = snapshot.items.len(),
                total_items = snapshot.total_items,
                total_price = snapshot.total_price,
                "Draft restored"
            );
            snapshot
        }
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Persisted draft is corrupt, starting empty");
            CartSnapshot::new()
        }
    }
}
