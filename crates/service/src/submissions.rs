use models::{
    collections,
    consultation_request::{ConsultationRequest, ConsultationRequestInput},
    contact_message::{ContactForm, ContactMessage},
    receipt::SubmissionReceipt,
};
use tracing::info;

use crate::{
    errors::ServiceError,
    store::{to_document, DocumentStore},
};

pub const CONSULTATION_ACCEPTED: &str =
    "Заявка успешно отправлена! Я свяжусь с вами в ближайшее время.";
pub const CONTACT_ACCEPTED: &str = "Сообщение отправлено! Отвечу вам в течение 24 часов.";

/// Validate and store a booking with status `pending`.
///
/// `service_id` is stored as given; it is not checked against the catalog.
pub async fn submit_consultation_request(
    store: &dyn DocumentStore,
    input: ConsultationRequestInput,
) -> Result<SubmissionReceipt, ServiceError> {
    let record = ConsultationRequest::create(input)?;
    store
        .insert_one(collections::CONSULTATION_REQUESTS, to_document(&record)?)
        .await?;
    info!(id = %record.id, service_id = %record.service_id, event = "consultation_request_stored", "consultation request accepted");
    Ok(SubmissionReceipt::accepted(record.id, CONSULTATION_ACCEPTED))
}

/// Validate and store a contact message with status `new`.
pub async fn submit_contact_message(
    store: &dyn DocumentStore,
    form: ContactForm,
) -> Result<SubmissionReceipt, ServiceError> {
    let record = ContactMessage::create(form)?;
    store
        .insert_one(collections::CONTACT_MESSAGES, to_document(&record)?)
        .await?;
    info!(id = %record.id, event = "contact_message_stored", "contact message accepted");
    Ok(SubmissionReceipt::accepted(record.id, CONTACT_ACCEPTED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn booking(service_id: &str) -> ConsultationRequestInput {
        ConsultationRequestInput {
            name: "Test User".into(),
            email: "test@example.com".into(),
            phone: "+7 999 123 45 67".into(),
            service_id: service_id.into(),
            message: Some("hi".into()),
            preferred_date: Some("2024-12-25".into()),
        }
    }

    #[tokio::test]
    async fn booking_is_stored_pending_with_unique_id() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let a = submit_consultation_request(store.as_ref(), booking("unknown-service")).await?;
        let b = submit_consultation_request(store.as_ref(), booking("unknown-service")).await?;
        assert!(a.success && b.success);
        assert_ne!(a.id, b.id);
        assert_eq!(a.message, CONSULTATION_ACCEPTED);

        let docs = store.find_all(collections::CONSULTATION_REQUESTS).await?;
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["id"], a.id.as_str());
        assert_eq!(docs[0]["status"], "pending");
        assert_eq!(docs[0]["service_id"], "unknown-service");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_booking_never_reaches_the_store() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let err = submit_consultation_request(store.as_ref(), booking("")).await.unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(store.count(collections::CONSULTATION_REQUESTS).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn contact_message_is_stored_new() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let form = ContactForm {
            name: "Test User".into(),
            email: "test@example.com".into(),
            subject: "Вопрос".into(),
            message: "Когда есть свободное время?".into(),
        };
        let receipt = submit_contact_message(store.as_ref(), form.clone()).await?;
        assert_eq!(receipt.message, CONTACT_ACCEPTED);
        let docs = store.find_all(collections::CONTACT_MESSAGES).await?;
        assert_eq!(docs[0]["status"], "new");
        assert_eq!(docs[0]["subject"], "Вопрос");

        let blank = ContactForm { message: "  ".into(), ..form };
        assert!(matches!(
            submit_contact_message(store.as_ref(), blank).await,
            Err(ServiceError::Validation(_))
        ));
        assert_eq!(store.count(collections::CONTACT_MESSAGES).await?, 1);
        Ok(())
    }
}
