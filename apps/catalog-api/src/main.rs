//! # Bookstore Catalog API
//!
//! HTTP server for the book catalog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog API Server                               │
//! │                                                                         │
//! │  Frontend ───► HTTP (8080) ───► Handlers ───► BookStore ───► PostgreSQL│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use bookstore_db::{seed, Database};
use catalog_api::docs::SWAGGER_UI_PATH;
use catalog_api::{router, ApiConfig, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,catalog_api=debug,bookstore_db=debug,sqlx=warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .init();

    info!("Starting Bookstore Catalog API server...");

    // Load configuration
    let config = ApiConfig::load().context("failed to load configuration")?;
    let addr = config.socket_addr()?;
    info!(
        %addr,
        max_connections = config.db_max_connections,
        cors_origins = config.cors_origins.len(),
        seed_on_startup = config.seed_on_startup,
        "Configuration loaded"
    );

    // Connect to database
    let db = Database::new(config.db_config()?)
        .await
        .context("failed to connect to PostgreSQL")?;
    info!("Connected to PostgreSQL");

    if config.seed_on_startup {
        warn!("SEED_ON_STARTUP is set: truncating books and loading sample data");
        let inserted = seed::reseed(&db.books())
            .await
            .context("failed to seed sample books")?;
        info!(inserted, "Sample books loaded");
    }

    // Create shared state and router
    let state = AppState::new(Arc::new(db.books()));
    let app = router(state, &config.cors_origins);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, docs = SWAGGER_UI_PATH, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
