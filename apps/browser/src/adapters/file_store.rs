//! apps/browser/src/adapters/file_store.rs
//!
//! This module contains the on-disk store adapter, the concrete
//! implementation of the `KeyValueStore` port from the core crate. The
//! whole store is one JSON file holding the key-to-value map, read into
//! memory on open and rewritten after every mutation.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::warn;

use recipe_browser_core::ports::{KeyValueStore, StoreError, StoreResult};

/// A file-backed key-value store.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`, loading any existing contents. A missing
    /// file starts empty; an unreadable one is discarded with a warning so
    /// the session can proceed from empty state.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), %err, "store file is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|err| StoreError::Backend(err.to_string()))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|err| StoreError::Io(err.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().await;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn values_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let store = FileStore::open(&path).await.unwrap();
            store.set("users", "[]").await.unwrap();
            store.set("currentUser", "{\"id\":1}").await.unwrap();
        }

        let store = FileStore::open(&path).await.unwrap();
        assert_eq!(store.get("users").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(
            store.get("currentUser").await.unwrap().as_deref(),
            Some("{\"id\":1}")
        );
    }

    #[tokio::test]
    async fn removals_are_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = FileStore::open(&path).await.unwrap();
        store.set("currentUser", "{}").await.unwrap();
        store.remove("currentUser").await.unwrap();
        drop(store);

        let store = FileStore::open(&path).await.unwrap();
        assert_eq!(store.get("currentUser").await.unwrap(), None);
    }

    #[tokio::test]
    async fn a_corrupt_store_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        tokio::fs::write(&path, "this is not json").await.unwrap();

        let store = FileStore::open(&path).await.unwrap();
        assert_eq!(store.get("users").await.unwrap(), None);
    }
}
