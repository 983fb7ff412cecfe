//! In-memory item store
//!
//! Holds every item created during the lifetime of the process.
//! Nothing is persisted; a restart starts from an empty store.
//!
//! Id assignment reads the current maximum and inserts under the same
//! write guard, so concurrent creates never observe the same maximum.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::model::{Item, ItemId, StoredItem};

/// Owned id → item mapping shared by request handlers
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<BTreeMap<ItemId, Item>>,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the item stored under `id`
    pub fn get(&self, id: ItemId) -> StoreResult<StoredItem> {
        self.read()
            .get(&id)
            .cloned()
            .map(|item| StoredItem::new(id, item))
            .ok_or(StoreError::NotFound(id))
    }

    /// Store `item` under the next id: (max existing id, or 0) + 1
    pub fn create(&self, item: Item) -> StoredItem {
        let mut items = self.write();
        let id = items.last_key_value().map(|(id, _)| *id).unwrap_or(0) + 1;
        items.insert(id, item.clone());
        StoredItem::new(id, item)
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Every mutation is a single insert, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<ItemId, Item>> {
        self.items.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<ItemId, Item>> {
        self.items.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_empty_store() {
        let store = ItemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(1), Err(StoreError::NotFound(1)));
    }

    #[test]
    fn test_first_id_is_one() {
        let store = ItemStore::new();
        let stored = store.create(Item::new("Widget", 9.99));
        assert_eq!(stored.id, 1);
        assert_eq!(stored.name, "Widget");
        assert_eq!(stored.description, None);
    }

    #[test]
    fn test_ids_follow_creation_order() {
        let store = ItemStore::new();
        for n in 1..=10 {
            let stored = store.create(Item::new(format!("item-{}", n), n as f64));
            assert_eq!(stored.id, n);
        }
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn test_get_returns_created_fields() {
        let store = ItemStore::new();
        let item = Item::new("Lamp", 24.5).with_description("desk lamp");
        let created = store.create(item.clone());

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.description.as_deref(), Some("desk lamp"));
        assert_eq!(fetched.price, 24.5);
    }

    #[test]
    fn test_unknown_ids_not_found() {
        let store = ItemStore::new();
        store.create(Item::new("a", 1.0));
        store.create(Item::new("b", 2.0));

        for id in [0, -1, i64::MIN, 3, 1000] {
            assert_eq!(store.get(id), Err(StoreError::NotFound(id)));
        }
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let store = ItemStore::new();
        let first = store.create(Item::new("same", 1.0));
        let second = store.create(Item::new("same", 1.0));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(ItemStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| store.create(Item::new(format!("{}-{}", t, i), 1.0)).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<ItemId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();

        let expected: Vec<ItemId> = (1..=400).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_poisoned_lock_recovered() {
        let store = ItemStore::new();
        store.create(Item::new("before", 1.0));

        let result = thread::scope(|s| {
            s.spawn(|| {
                let _guard = store.items.write().unwrap();
                panic!("writer panicked while holding the lock");
            })
            .join()
        });
        assert!(result.is_err());
        assert!(store.items.is_poisoned());

        assert_eq!(store.get(1).unwrap().name, "before");
        assert_eq!(store.create(Item::new("after", 2.0)).id, 2);
        assert_eq!(store.len(), 2);
    }
}
