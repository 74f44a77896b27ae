use axum::{extract::{rejection::JsonRejection, State}, Json};
use models::{
    consultation_request::ConsultationRequestInput,
    contact_message::ContactForm,
    receipt::SubmissionReceipt,
};
use service::submissions;

use crate::{errors::JsonApiError, observability, state::AppState};

#[utoipa::path(
    post, path = "/api/consultation-request", tag = "submissions",
    request_body = crate::openapi::ConsultationRequestDoc,
    responses(
        (status = 200, description = "Request stored with status `pending`", body = crate::openapi::SubmissionReceiptDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ApiErrorDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn create_consultation_request(
    State(state): State<AppState>,
    payload: Result<Json<ConsultationRequestInput>, JsonRejection>,
) -> Result<Json<SubmissionReceipt>, JsonApiError> {
    let Json(input) = payload.map_err(JsonApiError::from_rejection)?;
    let receipt = submissions::submit_consultation_request(state.store.as_ref(), input)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Create Failed"))?;
    observability::CONSULTATION_REQUESTS_TOTAL.inc();
    Ok(Json(receipt))
}

#[utoipa::path(
    post, path = "/api/contact", tag = "submissions",
    request_body = crate::openapi::ContactFormDoc,
    responses(
        (status = 200, description = "Message stored with status `new`", body = crate::openapi::SubmissionReceiptDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ApiErrorDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn create_contact_message(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<SubmissionReceipt>, JsonApiError> {
    let Json(form) = payload.map_err(JsonApiError::from_rejection)?;
    let receipt = submissions::submit_contact_message(state.store.as_ref(), form)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Create Failed"))?;
    observability::CONTACT_MESSAGES_TOTAL.inc();
    Ok(Json(receipt))
}
