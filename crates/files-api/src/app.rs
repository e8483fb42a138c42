//! Application builder: wires stores, services and the router, then serves.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tracing::{info, warn};

use files_cache::CacheManager;
use files_core::config::AppConfig;
use files_core::error::{AppError, ErrorKind};
use files_core::result::AppResult;
use files_database::open_file_store;
use files_storage::LocalBlobStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Open every backing store from `config` and serve until a shutdown signal.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting Files Manager server...");

    info!(provider = %config.database.provider, "Opening metadata store");
    let files = open_file_store(&config.database).await?;

    info!(provider = %config.cache.provider, "Initializing session cache");
    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    info!(root = %config.storage.root_path, "Opening blob store");
    let blobs = Arc::new(LocalBlobStore::new(&config.storage.root_path).await?);

    let addr = config.server.bind_addr();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app = build_app(AppState::new(config, files, blobs, cache));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e))?;

    info!(addr = %addr, "Files Manager server listening");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;
        }
        _ = async {
            let _ = shutdown_rx.wait_for(|stopping| *stopping).await;
            tokio::time::sleep(grace).await;
        } => {
            warn!(grace_seconds = grace.as_secs(), "Shutdown grace period elapsed; dropping open connections");
        }
    }

    info!("Files Manager server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
