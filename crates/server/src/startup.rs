use std::{future::Future, net::SocketAddr, sync::Arc};

use configs::{AppConfig, DatabaseConfig};
use service::{
    seed,
    store::{self, DocumentStore},
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{errors::StartupError, observability, routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, verify reachability and seed the reference collections.
///
/// Must complete before the router is exposed; any failure here is fatal.
pub async fn prepare_store(cfg: &DatabaseConfig) -> Result<Arc<dyn DocumentStore>, StartupError> {
    let store = store::connect(cfg).await?;
    store.ping().await?;
    let report = seed::seed_reference_data(store.as_ref()).await?;
    observability::SEEDED_DOCUMENTS_TOTAL.inc_by(report.total() as u64);
    info!(
        event = "seed_done",
        services_inserted = report.services_inserted,
        testimonials_inserted = report.testimonials_inserted,
        "reference data ready"
    );
    Ok(store)
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.server.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address {raw}: {e}")))
}

/// Run until Ctrl+C.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    run_until(cfg, async {
        let _ = tokio::signal::ctrl_c().await;
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    })
    .await
}

/// Prepare the store, then serve HTTP until `shutdown` resolves.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = bind_addr(&cfg)?;
    let store = prepare_store(&cfg.database).await?;
    let app = routes::build_router(AppState::new(store), build_cors());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, event = "listening", "astro consulting api accepting traffic");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
