use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Document, DocumentStore, StoreError};

/// Process-local store; contents vanish with the process.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        let map = self.collections.read().await;
        Ok(map.get(collection).map_or(0, |docs| docs.len() as u64))
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), StoreError> {
        let mut map = self.collections.write().await;
        map.entry(collection.to_string()).or_default().push(doc);
        Ok(())
    }

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<(), StoreError> {
        if docs.is_empty() {
            return Ok(());
        }
        let mut map = self.collections.write().await;
        map.entry(collection.to_string()).or_default().extend(docs);
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let map = self.collections.read().await;
        Ok(map.get(collection).cloned().unwrap_or_default())
    }
}
