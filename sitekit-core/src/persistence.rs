use async_trait::async_trait;
use serde_json::Value;

/// Errors surfaced by the persistence port and the repositories built on it.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Key-value persistence port.
///
/// Records are JSON documents stored under string keys of the form
/// `entity:id`. The store offers no transactions; concurrent writers are
/// last-write-wins. Entity repositories layer on top of this trait and own
/// the key scheme for their entity.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the document stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Store `value` under `key`, replacing any previous document.
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;

    /// List all documents whose key starts with `prefix`, ordered by key.
    async fn list(&self, prefix: &str) -> Result<Vec<Value>, StorageError>;

    /// Delete the document under `key`. Returns whether a document existed.
    async fn remove(&self, key: &str) -> Result<bool, StorageError>;
}
