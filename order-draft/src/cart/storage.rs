//! Snapshot persistence for the order draft
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `drafts` | storage key | JSON array of `LineItem` | Latest draft snapshot |
//!
//! Only the line items are written; totals are recomputed on restore.
//!
//! # Durability
//!
//! redb commits are durable once `commit()` returns. The draft is a cache of
//! in-memory state, so a lost write costs at most the last mutation.

use parking_lot::Mutex;
use redb::{Database, ReadableDatabase, TableDefinition};
use shared::cart::LineItem;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for draft snapshots: key = storage key, value = JSON-serialized Vec<LineItem>
const DRAFTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("drafts");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value durable store for serialized draft snapshots
pub trait SnapshotStore: Send + Sync {
    /// Replace the snapshot stored under `key`
    fn save(&self, key: &str, snapshot: &[u8]) -> StorageResult<()>;

    /// Read the snapshot stored under `key`, `None` when absent
    fn load(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;
}

/// Serialize draft lines into the snapshot format
pub fn encode_items(items: &[LineItem]) -> StorageResult<Vec<u8>> {
    Ok(serde_json::to_vec(items)?)
}

/// Parse the snapshot format back into draft lines
pub fn decode_items(bytes: &[u8]) -> StorageResult<Vec<LineItem>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Draft storage backed by redb
#[derive(Clone)]
pub struct DraftStorage {
    db: Arc<Database>,
}

impl std::fmt::Debug for DraftStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftStorage").finish_non_exhaustive()
    }
}

impl DraftStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests and ephemeral sessions)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DRAFTS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Remove the snapshot stored under `key`
    pub fn remove(&self, key: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(DRAFTS_TABLE)?;
            table.remove(key)?;
        }
        txn.commit()?;
        Ok(())
    }
}

impl SnapshotStore for DraftStorage {
    fn save(&self, key: &str, snapshot: &[u8]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(DRAFTS_TABLE)?;
            table.insert(key, snapshot)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn load(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DRAFTS_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }
}

/// In-process store, for tests and hosts without durable storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&self, key: &str, snapshot: &[u8]) -> StorageResult<()> {
        self.entries.lock().insert(key.to_string(), snapshot.to_vec());
        Ok(())
    }

    fn load(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.entries.lock().get(key).cloned())
    }
}
