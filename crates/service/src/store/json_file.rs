use std::{collections::HashMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};

use super::{Document, DocumentStore, StoreError};

type Collections = HashMap<String, Vec<Document>>;

/// JSON file-backed document store.
///
/// Keeps every collection in memory and rewrites the whole file after each
/// insert. Intended for local development where running MongoDB is overkill.
pub struct JsonFileStore {
    inner: RwLock<Collections>,
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Load the store from `path`, creating an empty file if missing.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, StoreError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Connection(format!("cannot create {}: {e}", parent.display())))?;
        }

        let map: Collections = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::Encoding(format!("{}: {e}", file_path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty = Collections::new();
                write_file(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(StoreError::Connection(format!("{}: {e}", file_path.display()))),
        };

        Ok(Arc::new(Self { inner: RwLock::new(map), file_path }))
    }
}

async fn write_file(path: &PathBuf, map: &Collections) -> Result<(), StoreError> {
    let data = serde_json::to_vec(map).map_err(|e| StoreError::Encoding(e.to_string()))?;
    fs::write(path, data).await.map_err(|e| StoreError::Operation(e.to_string()))
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    fn backend(&self) -> &'static str {
        "json-file"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        fs::metadata(&self.file_path)
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Connection(e.to_string()))
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        let map = self.inner.read().await;
        Ok(map.get(collection).map_or(0, |docs| docs.len() as u64))
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), StoreError> {
        self.insert_many(collection, vec![doc]).await
    }

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<(), StoreError> {
        if docs.is_empty() {
            return Ok(());
        }
        // 持有写锁直到落盘，避免并发写入交错
        let mut map = self.inner.write().await;
        let entry = map.entry(collection.to_string()).or_default();
        let before = entry.len();
        entry.extend(docs);
        if let Err(e) = write_file(&self.file_path, &map).await {
            // roll back so memory never gets ahead of the file
            if let Some(entry) = map.get_mut(collection) {
                entry.truncate(before);
            }
            return Err(e);
        }
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let map = self.inner.read().await;
        Ok(map.get(collection).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::to_document;
    use serde_json::json;

    #[tokio::test]
    async fn json_file_store_persists_across_reopen() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_file_store_{}.json", uuid::Uuid::new_v4()));
        let store = JsonFileStore::open(&tmp).await?;
        store.ping().await?;

        assert_eq!(store.count("services").await?, 0);
        store.insert_one("services", to_document(&json!({"id": "a"}))?).await?;
        store.insert_many("services", vec![to_document(&json!({"id": "b"}))?]).await?;

        let reopened = JsonFileStore::open(&tmp).await?;
        assert_eq!(reopened.count("services").await?, 2);
        let docs = reopened.find_all("services").await?;
        assert_eq!(docs[0]["id"], "a");
        assert_eq!(docs[1]["id"], "b");

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_rejected() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_file_store_{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, b"{not json").await?;
        assert!(matches!(JsonFileStore::open(&tmp).await, Err(StoreError::Encoding(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
