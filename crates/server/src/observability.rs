use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static CONSULTATION_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "astro_consultation_requests_total",
        "Consultation requests stored"
    )
    .expect("register consultation_requests_total")
});

pub static CONTACT_MESSAGES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "astro_contact_messages_total",
        "Contact messages stored"
    )
    .expect("register contact_messages_total")
});

pub static VALIDATION_REJECTIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "astro_validation_rejections_total",
        "Submissions rejected before reaching the store"
    )
    .expect("register validation_rejections_total")
});

pub static STORE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "astro_store_errors_total",
        "Document store operations that failed while serving requests"
    )
    .expect("register store_errors_total")
});

pub static SEEDED_DOCUMENTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "astro_seeded_documents_total",
        "Reference documents inserted by startup seeding"
    )
    .expect("register seeded_documents_total")
});

/// Force registration so every series shows up from the first scrape.
pub fn register() {
    Lazy::force(&CONSULTATION_REQUESTS_TOTAL);
    Lazy::force(&CONTACT_MESSAGES_TOTAL);
    Lazy::force(&VALIDATION_REJECTIONS_TOTAL);
    Lazy::force(&STORE_ERRORS_TOTAL);
    Lazy::force(&SEEDED_DOCUMENTS_TOTAL);
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

pub async fn metrics() -> (StatusCode, String) {
    encode_metrics()
}
