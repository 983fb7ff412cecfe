//! Shared handler state

use crate::item::ItemStore;

/// State shared across handlers
///
/// Owned by the server and injected through axum's `State` extractor,
/// so every router instance can carry its own isolated store.
#[derive(Debug, Default)]
pub struct ItemsState {
    pub store: ItemStore,
}

impl ItemsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: ItemStore) -> Self {
        Self { store }
    }
}
