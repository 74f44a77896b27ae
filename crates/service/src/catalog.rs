use models::{collections, service::Service, testimonial::Testimonial};
use serde::de::DeserializeOwned;

use crate::{
    errors::ServiceError,
    store::{from_document, DocumentStore},
};

/// All catalog services, in store order.
pub async fn list_services(store: &dyn DocumentStore) -> Result<Vec<Service>, ServiceError> {
    list_all(store, collections::SERVICES).await
}

/// All testimonials, in store order.
pub async fn list_testimonials(store: &dyn DocumentStore) -> Result<Vec<Testimonial>, ServiceError> {
    list_all(store, collections::TESTIMONIALS).await
}

async fn list_all<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
) -> Result<Vec<T>, ServiceError> {
    let docs = store.find_all(collection).await?;
    let items = docs.into_iter().map(from_document).collect::<Result<Vec<T>, _>>()?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{seed::seed_reference_data, store::{memory::MemoryStore, to_document}};
    use serde_json::json;

    #[tokio::test]
    async fn empty_store_lists_nothing() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        assert!(list_services(store.as_ref()).await?.is_empty());
        assert!(list_testimonials(store.as_ref()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn lists_seeded_catalog_in_order() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        seed_reference_data(store.as_ref()).await?;

        let services = list_services(store.as_ref()).await?;
        assert_eq!(services.len(), 5);
        assert_eq!(services[0].title, "Психоастрологическая консультация");
        assert_eq!(services[4].title, "Карьерное ориентирование");

        let testimonials = list_testimonials(store.as_ref()).await?;
        assert_eq!(testimonials.len(), 3);
        assert_eq!(testimonials[0].name, "Анна М.");
        Ok(())
    }

    #[tokio::test]
    async fn malformed_stored_document_is_a_store_error() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        store
            .insert_one(collections::TESTIMONIALS, to_document(&json!({"id": "t", "rating": "five"}))?)
            .await?;
        let err = list_testimonials(store.as_ref()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Store(_)));
        assert!(!err.is_client_error());
        Ok(())
    }
}
