//! # Strategy Service
//!
//! The processing endpoint: receives a batch of parameter records over HTTP,
//! renders it, computes its statistics and answers with a combined report.
//!
//! The router holds no state. Each request is computed from its own batch, so
//! concurrent requests need no locking.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use configuration::ServerConfig;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;

pub use error::ServiceError;
pub use handlers::build_report;

/// Builds the application router.
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/strategy", post(handlers::strategy_analysis))
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn run_server(config: &ServerConfig) -> anyhow::Result<()> {
    let app = router(config);
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Strategy service listening on http://{}/strategy", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Strategy service stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
}
