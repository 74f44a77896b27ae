use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use service::store::StoreError;
use thiserror::Error;
use tracing::{error, warn};

use crate::observability;

/// JSON error body: `{"error": <title>, "detail": <message|null>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        observability::VALIDATION_REJECTIONS_TOTAL.inc();
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(detail.into()))
    }

    /// Body could not be decoded into the expected payload.
    pub fn from_rejection(rejection: JsonRejection) -> Self {
        warn!(status = %rejection.status(), reason = %rejection.body_text(), "rejected request body");
        Self::validation(rejection.body_text())
    }

    /// Map a service failure; `title` names the failed operation for 5xx responses.
    pub fn from_service(e: ServiceError, title: &'static str) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::validation(msg),
            ServiceError::Store(err) => {
                observability::STORE_ERRORS_TOTAL.inc();
                error!(err = %err, operation = title, "store operation failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, title, Some(err.to_string()))
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.title, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

/// Failures that abort the process before it accepts traffic.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("document store unavailable: {0}")]
    Store(#[from] StoreError),
    #[error("seeding failed: {0}")]
    Seed(#[from] ServiceError),
    #[error("cannot serve http: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_and_store_to_500() {
        let v = JsonApiError::from_service(ServiceError::Validation("bad".into()), "Create Failed");
        assert_eq!(v.status, StatusCode::BAD_REQUEST);
        assert_eq!(v.title, "Validation Error");

        let s = JsonApiError::from_service(
            ServiceError::Store(StoreError::Operation("down".into())),
            "Create Failed",
        );
        assert_eq!(s.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(s.title, "Create Failed");
        assert_eq!(s.detail.as_deref(), Some("operation failed: down"));
    }
}
