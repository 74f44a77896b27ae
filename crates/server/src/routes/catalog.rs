use axum::{extract::State, Json};
use models::{service::Service, testimonial::Testimonial};
use service::catalog;
use tracing::debug;

use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/services", tag = "catalog",
    responses(
        (status = 200, description = "Full service catalog", body = [crate::openapi::ServiceDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, JsonApiError> {
    let list = catalog::list_services(state.store.as_ref())
        .await
        .map_err(|e| JsonApiError::from_service(e, "List Failed"))?;
    debug!(count = list.len(), "list services");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/testimonials", tag = "catalog",
    responses(
        (status = 200, description = "All testimonials", body = [crate::openapi::TestimonialDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn list_testimonials(State(state): State<AppState>) -> Result<Json<Vec<Testimonial>>, JsonApiError> {
    let list = catalog::list_testimonials(state.store.as_ref())
        .await
        .map_err(|e| JsonApiError::from_service(e, "List Failed"))?;
    debug!(count = list.len(), "list testimonials");
    Ok(Json(list))
}
