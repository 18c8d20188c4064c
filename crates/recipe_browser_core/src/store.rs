//! crates/recipe_browser_core/src/store.rs
//!
//! An in-memory implementation of the key-value port. Backs the test
//! suites and one-shot runs that should not touch the disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::{KeyValueStore, StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
