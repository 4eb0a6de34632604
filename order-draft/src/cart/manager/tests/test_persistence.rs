use super::*;
use crate::cart::storage::DraftStorage;
use crate::core::Config;

#[test]
fn test_every_change_is_written_through() {
    let (manager, store) = create_manager_with_store();

    manager.add_item(chicken_bowl(2)).unwrap();
    assert_eq!(persisted_items(store.as_ref()), manager.items());

    manager.add_item(salmon_rice(june(2), 1)).unwrap();
    manager.update_quantity("chicken-bowl", june(1), 4).unwrap();
    assert_eq!(persisted_items(store.as_ref()), manager.items());

    manager.remove_item("salmon-rice", june(2)).unwrap();
    assert_eq!(
        persisted_items(store.as_ref()),
        vec![LineItem::new("chicken-bowl", "Chicken Bowl", june(1), 4, 12.50)]
    );
}

#[test]
fn test_restore_round_trip() {
    let (manager, store) = create_manager_with_store();
    manager.add_item(chicken_bowl(2)).unwrap();
    manager.add_item(salmon_rice(june(3), 2)).unwrap();
    manager.add_item(salmon_rice(june(2), 1)).unwrap();
    let before = manager.snapshot();
    drop(manager);

    let restored = CartManager::restore(store, KEY);

    assert_eq!(restored.items(), before.items);
    assert_eq!(restored.total_items(), before.total_items);
    assert_eq!(restored.total_price(), before.total_price);
}

#[test]
fn test_restore_absent_snapshot_is_empty() {
    let manager = CartManager::restore(Arc::new(MemoryStore::new()), "someone-else");

    assert!(manager.is_empty());
    assert_eq!(manager.total_price(), 0.0);
}

#[test]
fn test_restore_corrupt_snapshot_is_empty() {
    let store = Arc::new(MemoryStore::new());
    store.save(KEY, b"{not json").unwrap();

    let manager = CartManager::restore(store.clone(), KEY);

    assert!(manager.is_empty());
    // The draft is usable and overwrites the corrupt value
    manager.add_item(chicken_bowl(1)).unwrap();
    assert_eq!(persisted_items(store.as_ref()).len(), 1);
}

#[test]
fn test_restore_wrong_shape_is_empty() {
    let store = Arc::new(MemoryStore::new());
    store
        .save(KEY, br#"{"items": [], "total_items": 3}"#)
        .unwrap();

    let manager = CartManager::restore(store, KEY);

    assert!(manager.is_empty());
    assert_eq!(manager.total_items(), 0);
}

#[test]
fn test_restore_unreadable_store_is_empty() {
    let manager = CartManager::restore(Arc::new(UnreadableStore), KEY);

    assert!(manager.is_empty());
    manager.add_item(chicken_bowl(1)).unwrap();
    assert_eq!(manager.total_items(), 1);
}

#[test]
fn test_restore_normalizes_lines() {
    let store = Arc::new(MemoryStore::new());
    seed_store(
        store.as_ref(),
        &[
            chicken_bowl(2),
            salmon_rice(june(2), 0),
            LineItem::new("chicken-bowl", "Other Name", june(1), 3, 20.0),
            salmon_rice(june(4), 1),
        ],
    );

    let manager = CartManager::restore(store, KEY);

    let items = manager.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].meal_id, "chicken-bowl");
    assert_eq!(items[0].quantity, 5);
    assert_eq!(items[0].unit_price, 12.50);
    assert_eq!(items[1].date, june(4));
    assert_eq!(manager.total_items(), 6);
    assert_eq!(manager.total_price(), 77.75);
}

#[test]
fn test_failing_store_keeps_in_memory_state() {
    let manager = CartManager::restore(Arc::new(FailingStore), KEY);

    manager.add_item(chicken_bowl(2)).unwrap();
    manager.add_item(chicken_bowl(1)).unwrap();
    manager.update_quantity("chicken-bowl", june(1), 5).unwrap();

    assert_eq!(manager.total_items(), 5);
    assert_eq!(manager.total_price(), 62.50);
}

#[test]
fn test_storage_key_isolates_drafts() {
    let store = Arc::new(MemoryStore::new());
    let alice = CartManager::restore(store.clone(), "draft-alice");
    let bob = CartManager::restore(store.clone(), "draft-bob");

    alice.add_item(chicken_bowl(2)).unwrap();
    bob.add_item(salmon_rice(june(1), 1)).unwrap();

    assert_eq!(store.len(), 2);
    let restored = CartManager::restore(store, "draft-alice");
    assert_eq!(restored.storage_key(), "draft-alice");
    assert_eq!(restored.items(), vec![chicken_bowl(2)]);
}

#[test]
fn test_redb_restart_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("draft.redb");

    {
        let storage = Arc::new(DraftStorage::open(&path).unwrap());
        let manager = CartManager::restore(storage, KEY);
        manager.add_item(chicken_bowl(2)).unwrap();
        manager.add_item(chicken_bowl(1)).unwrap();
        manager.update_quantity("chicken-bowl", june(1), 5).unwrap();
    }

    let storage = Arc::new(DraftStorage::open(&path).unwrap());
    let manager = CartManager::restore(storage, KEY);

    let line = manager.find_item("chicken-bowl", june(1)).unwrap();
    assert_eq!(line.quantity, 5);
    assert_eq!(line.unit_price, 12.50);
    assert_eq!(manager.total_price(), 62.50);
}

#[test]
fn test_from_config_inline() {
    let dir = tempfile::tempdir().unwrap();
    let work_dir = dir.path().join("nested").to_string_lossy().to_string();
    let config = Config::with_overrides(work_dir, PersistMode::Inline);

    {
        let (manager, handle) = CartManager::from_config(&config);
        assert!(handle.is_none());
        manager.add_item(salmon_rice(june(2), 3)).unwrap();
    }

    let (manager, _) = CartManager::from_config(&config);
    assert_eq!(manager.total_items(), 3);
    assert_eq!(manager.total_price(), 45.75);
}

#[test]
fn test_from_config_background_without_runtime_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(
        dir.path().to_string_lossy().to_string(),
        PersistMode::Background,
    );

    {
        let (manager, handle) = CartManager::from_config(&config);
        assert!(handle.is_none());
        manager.add_item(chicken_bowl(1)).unwrap();
    }

    let (manager, _) = CartManager::from_config(&config);
    assert_eq!(manager.total_items(), 1);
}

#[test]
fn test_from_config_unusable_work_dir_uses_memory() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();
    let config = Config::with_overrides(
        blocker.to_string_lossy().to_string(),
        PersistMode::Inline,
    );

    let (manager, _) = CartManager::from_config(&config);

    assert!(manager.is_empty());
    manager.add_item(chicken_bowl(2)).unwrap();
    assert_eq!(manager.total_price(), 25.00);
}

#[tokio::test]
async fn test_background_worker_flushes_on_drop() {
    let store = Arc::new(MemoryStore::new());
    let (manager, handle) = CartManager::restore_with_worker(store.clone(), KEY);

    manager.add_item(chicken_bowl(2)).unwrap();
    manager.add_item(chicken_bowl(1)).unwrap();
    manager.update_quantity("chicken-bowl", june(1), 5).unwrap();
    manager.add_item(salmon_rice(june(2), 1)).unwrap();
    let expected = manager.items();
    drop(manager);
    handle.await.unwrap();

    assert_eq!(persisted_items(store.as_ref()), expected);
    let restored = CartManager::restore(store, KEY);
    assert_eq!(restored.total_items(), 6);
    assert_eq!(restored.total_price(), 77.75);
}

#[tokio::test]
async fn test_background_mutations_do_not_wait_for_store() {
    let (manager, handle) = CartManager::restore_with_worker(Arc::new(FailingStore), KEY);

    manager.add_item(chicken_bowl(2)).unwrap();
    manager.clear_cart();
    manager.add_item(salmon_rice(june(1), 1)).unwrap();

    assert_eq!(manager.total_items(), 1);
    drop(manager);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_from_config_background_spawns_worker() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(
        dir.path().to_string_lossy().to_string(),
        PersistMode::Background,
    );

    let (manager, handle) = CartManager::from_config(&config);
    let handle = handle.expect("worker spawned inside a runtime");
    manager.add_item(chicken_bowl(3)).unwrap();
    drop(manager);
    handle.await.unwrap();

    let (restored, _) = CartManager::from_config(&Config::with_overrides(
        dir.path().to_string_lossy().to_string(),
        PersistMode::Inline,
    ));
    assert_eq!(restored.total_items(), 3);
    assert_eq!(restored.total_price(), 37.50);
}
