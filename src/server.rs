//! Static File Server
//!
//! Serves the built front-end from `STATIC_DIR`. Any path that does not map to
//! a file gets `index.html` with 200 OK so client-side routes survive a reload.
//!
//! Created: 2026-10-19

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

pub fn create_router(config: &ServerConfig) -> Router {
    let index = ServeFile::new(config.index_path());
    let static_files = ServeDir::new(&config.static_dir).fallback(index);

    Router::new()
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until Ctrl-C
pub async fn run_server(config: ServerConfig) -> Result<()> {
    if !config.index_path().is_file() {
        warn!(
            "{} not found, unmatched routes will return 404",
            config.index_path().display()
        );
    }

    let addr = config.socket_addr();
    let app = create_router(&config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(
        "Interface running on port {} (serving {})",
        config.port,
        config.static_dir.display()
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("Server error: {}", e);
            anyhow::anyhow!("Server error: {}", e)
        })?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", e);
        // No signal handler: run until killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
