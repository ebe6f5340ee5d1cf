//! Chordbook Server — guitar chord and song catalog
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use chordbook_api::{AppState, build_router};
use chordbook_core::config::AppConfig;
use chordbook_core::error::AppError;
use chordbook_database::DatabasePool;
use chordbook_storage::LocalMediaStorage;

#[tokio::main]
async fn main() {
    let env = std::env::var("CHORDBOOK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Chordbook v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db = DatabasePool::connect(&config.database).await?;
    chordbook_database::migration::run_migrations(db.pool()).await?;

    // ── Media storage ────────────────────────────────────────────
    let storage = Arc::new(LocalMediaStorage::new(&config.storage.media_root).await?);
    tracing::info!(root = %config.storage.media_root, "Media storage initialized");

    // ── Wire state and router ────────────────────────────────────
    let config = Arc::new(config);
    let state = AppState::new(config.clone(), db.clone(), storage);
    let router = build_router(state);

    // ── Serve ────────────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(addr = %addr, "Chordbook listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

/// Resolve when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {e}");
    }
    tracing::info!("Shutdown signal received");
}
