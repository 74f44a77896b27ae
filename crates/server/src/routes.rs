pub mod catalog;
pub mod submissions;

use axum::{
    routing::{get, post},
    Json, Router,
};
use common::types::Health;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{observability, openapi::ApiDoc, state::AppState};

/// Liveness probe; never touches the store.
#[utoipa::path(get, path = "/api/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::healthy())
}

/// Build the application router: API routes, metrics, docs, CORS and tracing.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    observability::register();

    let api = Router::new()
        .route("/api/health", get(health))
        .route("/api/services", get(catalog::list_services))
        .route("/api/testimonials", get(catalog::list_testimonials))
        .route("/api/consultation-request", post(submissions::create_consultation_request))
        .route("/api/contact", post(submissions::create_contact_message))
        .with_state(state);

    Router::new()
        .merge(api)
        .route("/metrics", get(observability::metrics))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
