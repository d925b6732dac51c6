use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use sitekit_core::{KeyValueStore, StorageError};
use tokio::sync::RwLock;
use tracing::debug;

/// In-process implementation of the key-value persistence port.
///
/// A namespaced map of JSON documents with last-write-wins semantics; the
/// development stand-in for a real database.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        debug!(key, "document stored");
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<Value>, StorageError> {
        let entries = self.entries.read().await;

        let mut matched: Vec<(&String, &Value)> = entries
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .collect();
        matched.sort_by(|a, b| a.0.cmp(b.0));

        Ok(matched.into_iter().map(|(_, value)| value.clone()).collect())
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        debug!(key, "document removed");
        Ok(self.entries.write().await.remove(key).is_some())
    }
}
