use super::*;
use crate::cart::storage::{StorageError, StorageResult};
use crate::catalog::StaticCatalog;
use shared::CatalogMeal;
use shared::cart::{CartCommandPayload, CartEventType, CommandErrorCode};

const KEY: &str = DEFAULT_STORAGE_KEY;

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

fn chicken_bowl(quantity: i32) -> LineItem {
    LineItem::new("chicken-bowl", "Chicken Bowl", june(1), quantity, 12.50)
}

fn salmon_rice(date: NaiveDate, quantity: i32) -> LineItem {
    LineItem::new("salmon-rice", "Salmon Rice", date, quantity, 15.25)
}

fn create_test_manager() -> CartManager {
    CartManager::restore(Arc::new(MemoryStore::new()), KEY)
}

fn create_manager_with_store() -> (CartManager, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (CartManager::restore(store.clone(), KEY), store)
}

/// Lines currently written under the default key
fn persisted_items(store: &dyn SnapshotStore) -> Vec<LineItem> {
    let bytes = store.load(KEY).unwrap().expect("snapshot persisted");
    decode_items(&bytes).unwrap()
}

fn seed_store(store: &dyn SnapshotStore, items: &[LineItem]) {
    store.save(KEY, &encode_items(items).unwrap()).unwrap();
}

fn create_catalog() -> Arc<StaticCatalog> {
    Arc::new(StaticCatalog::from_meals([
        CatalogMeal::new("chicken-bowl", "Chicken Bowl", 12.50),
        CatalogMeal::new("tofu-curry", "Tofu Curry", 11.00),
        CatalogMeal::new("beef-stew", "Beef Stew", 14.00).unavailable(),
    ]))
}

/// Store whose writes always fail
struct FailingStore;

impl SnapshotStore for FailingStore {
    fn save(&self, _key: &str, _snapshot: &[u8]) -> StorageResult<()> {
        Err(StorageError::Unavailable("disk full".into()))
    }

    fn load(&self, _key: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(None)
    }
}

/// Store whose reads always fail
struct UnreadableStore;

impl SnapshotStore for UnreadableStore {
    fn save(&self, _key: &str, _snapshot: &[u8]) -> StorageResult<()> {
        Ok(())
    }

    fn load(&self, _key: &str) -> StorageResult<Option<Vec<u8>>> {
        Err(StorageError::Unavailable("permission denied".into()))
    }
}

mod test_persistence;
