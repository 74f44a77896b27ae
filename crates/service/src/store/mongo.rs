use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, Bson, Document as BsonDocument},
    options::ClientOptions,
    Client, Collection, Database,
};
use serde_json::Value;

use super::{Document, DocumentStore, StoreError};

/// MongoDB-backed store.
///
/// The driver keeps its own connection pool, so one `MongoStore` is created at
/// startup and shared by all handlers. Reads project away the native `_id`;
/// records are addressed by their own `id` field.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(url: &str, db_name: &str, timeout: Duration) -> Result<Self, StoreError> {
        let mut opts = ClientOptions::parse(url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        opts.app_name = Some("astro-consulting".into());
        opts.connect_timeout = Some(timeout);
        opts.server_selection_timeout = Some(timeout);
        let client = Client::with_options(opts).map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self { db: client.database(db_name) })
    }

    fn collection(&self, name: &str) -> Collection<BsonDocument> {
        self.db.collection::<BsonDocument>(name)
    }
}

fn to_bson(doc: Document) -> Result<BsonDocument, StoreError> {
    bson::to_document(&doc).map_err(|e| StoreError::Encoding(e.to_string()))
}

fn from_bson(doc: BsonDocument) -> Result<Document, StoreError> {
    match Bson::Document(doc).into_relaxed_extjson() {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Encoding(format!("expected a document, got {other}"))),
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Connection(e.to_string()))
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        self.collection(collection)
            .count_documents(doc! {})
            .await
            .map_err(|e| StoreError::Operation(e.to_string()))
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), StoreError> {
        self.collection(collection)
            .insert_one(to_bson(doc)?)
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Operation(e.to_string()))
    }

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<(), StoreError> {
        // the server rejects empty batches
        if docs.is_empty() {
            return Ok(());
        }
        let batch = docs.into_iter().map(to_bson).collect::<Result<Vec<_>, _>>()?;
        self.collection(collection)
            .insert_many(batch)
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Operation(e.to_string()))
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .collection(collection)
            .find(doc! {})
            .projection(doc! { "_id": 0 })
            .await
            .map_err(|e| StoreError::Operation(e.to_string()))?;
        let docs: Vec<BsonDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Operation(e.to_string()))?;
        docs.into_iter().map(from_bson).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::to_document;
    use serde_json::json;

    #[test]
    fn bson_conversion_keeps_flat_fields() -> Result<(), anyhow::Error> {
        let doc = to_document(&json!({
            "id": "t-1", "rating": 5, "avatar_url": null, "features": ["a", "b"]
        }))?;
        let back = from_bson(to_bson(doc)?)?;
        assert_eq!(back["id"], "t-1");
        assert_eq!(back["rating"], 5);
        assert_eq!(back["avatar_url"], Value::Null);
        assert_eq!(back["features"], json!(["a", "b"]));
        Ok(())
    }

    // Needs a reachable server: MONGO_TEST_URL=mongodb://localhost:27017
    #[tokio::test]
    async fn mongo_round_trip() -> Result<(), anyhow::Error> {
        let Ok(url) = std::env::var("MONGO_TEST_URL") else { return Ok(()); };
        let db_name = format!("astro_test_{}", uuid::Uuid::new_v4().simple());
        let store = MongoStore::connect(&url, &db_name, Duration::from_secs(5)).await?;
        store.ping().await?;

        assert_eq!(store.count("services").await?, 0);
        store.insert_many("services", vec![to_document(&json!({"id": "a"}))?, to_document(&json!({"id": "b"}))?]).await?;
        store.insert_one("services", to_document(&json!({"id": "c"}))?).await?;
        assert_eq!(store.count("services").await?, 3);

        let docs = store.find_all("services").await?;
        assert!(docs.iter().all(|d| d.get("_id").is_none()));
        assert_eq!(docs.len(), 3);

        store.db.drop().await?;
        Ok(())
    }
}
