//! Document store abstraction.
//!
//! Documents are flat JSON objects addressed by collection name. Backends are
//! picked from the connection string scheme:
//! - `mongodb://`, `mongodb+srv://` → [`mongo::MongoStore`]
//! - `file://<path>` → [`json_file::JsonFileStore`]
//! - `memory://` → [`memory::MemoryStore`]

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

pub mod json_file;
pub mod memory;
pub mod mongo;

/// A stored record.
pub type Document = serde_json::Map<String, Value>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("operation failed: {0}")]
    Operation(String),
    #[error("encoding failed: {0}")]
    Encoding(String),
}

/// Collection-level operations used by the service layer.
///
/// Implementations are shared across concurrent handlers behind an `Arc`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    /// Round-trip to verify the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn count(&self, collection: &str) -> Result<u64, StoreError>;

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), StoreError>;

    /// Insert a batch in a single call. An empty batch is a no-op.
    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<(), StoreError>;

    /// Every document in store-native order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;
}

pub fn to_document<T: Serialize>(value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value).map_err(|e| StoreError::Encoding(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Encoding(format!("expected a JSON object, got {other}"))),
    }
}

pub fn from_document<T: DeserializeOwned>(doc: Document) -> Result<T, StoreError> {
    serde_json::from_value(Value::Object(doc)).map_err(|e| StoreError::Encoding(e.to_string()))
}

/// Open the store named by `cfg.url`.
pub async fn connect(cfg: &configs::DatabaseConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    let url = cfg.url.trim();
    let store: Arc<dyn DocumentStore> = if let Some(path) = url.strip_prefix("file://") {
        json_file::JsonFileStore::open(path).await?
    } else if url.starts_with("memory://") {
        memory::MemoryStore::new()
    } else if url.starts_with("mongodb://") || url.starts_with("mongodb+srv://") {
        let timeout = Duration::from_secs(cfg.connect_timeout_secs);
        Arc::new(mongo::MongoStore::connect(url, &cfg.name, timeout).await?)
    } else {
        return Err(StoreError::Connection(format!("unsupported connection string scheme: {url}")));
    };
    info!(backend = store.backend(), event = "store_connected", "document store ready");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_objects_are_not_documents() {
        assert!(matches!(to_document(&json!([1, 2])), Err(StoreError::Encoding(_))));
        let doc = to_document(&json!({"id": "x"})).unwrap();
        assert_eq!(doc["id"], "x");
    }

    #[tokio::test]
    async fn connect_picks_backend_by_scheme() -> Result<(), anyhow::Error> {
        let mut cfg = configs::DatabaseConfig { url: "memory://".into(), ..Default::default() };
        assert_eq!(connect(&cfg).await?.backend(), "memory");

        let tmp = std::env::temp_dir().join(format!("store_{}.json", uuid::Uuid::new_v4()));
        cfg.url = format!("file://{}", tmp.display());
        assert_eq!(connect(&cfg).await?.backend(), "json-file");
        let _ = tokio::fs::remove_file(&tmp).await;

        cfg.url = "redis://localhost".into();
        assert!(matches!(connect(&cfg).await, Err(StoreError::Connection(_))));
        Ok(())
    }
}
