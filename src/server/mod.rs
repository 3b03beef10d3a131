use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::storage::Registry;

pub mod error;
pub mod routes;

pub use error::ApiError;

/// Server state
pub struct AppState {
    pub registry: Arc<Registry>,
}

/// Build the HTTP router around an already opened registry
pub fn create_router(registry: Arc<Registry>) -> Router {
    let state = Arc::new(AppState { registry });

    let api_v1 = Router::new()
        .route(
            "/entry",
            get(routes::get_entries).options(routes::entry_options),
        )
        .route("/entry/{food}/{calories}", post(routes::add_entry))
        .route("/entry/{food}/{calories}/", post(routes::add_entry))
        .route("/entry/{food}/{calories}/{timestamp}", post(routes::add_entry))
        .route(
            "/calories",
            get(routes::get_calories).options(routes::calories_options),
        );

    Router::new()
        .nest("/api/v1", api_v1)
        .route("/healthy", get(routes::liveness))
        .route("/ready", get(routes::readiness))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(addr: SocketAddr, registry: Arc<Registry>) -> anyhow::Result<()> {
    let app = create_router(registry);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
