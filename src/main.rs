//! LRU KV Server - An in-memory key/value cache over HTTP
//!
//! Binary entry point: configuration, logging, background sweep and the
//! HTTP listener.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_kv_server::{create_router, spawn_cleanup_task, AppState, CacheEngine, Config};

/// Main entry point for the cache server.
///
/// # Startup Sequence
/// 1. Load configuration from environment variables
/// 2. Initialize tracing subscriber for logging
/// 3. Create the cache engine with the configured capacity
/// 4. Start the background expiry sweep (unless disabled)
/// 5. Serve HTTP until SIGINT/SIGTERM, then drain the engine
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // RUST_LOG overrides the environment-dependent default
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting LRU KV cache server");
    info!(
        "Configuration loaded: capacity={}, port={}, cleanup_interval={}s, app_env={:?}",
        config.capacity, config.server_port, config.cleanup_interval, config.app_env
    );

    let engine = Arc::new(CacheEngine::new(config.capacity));
    let state = AppState::from_shared(engine.clone());

    let cleanup_handle = if config.cleanup_interval > 0 {
        info!("Background expiry sweep started");
        Some(spawn_cleanup_task(engine.clone(), config.cleanup_interval))
    } else {
        info!("Background expiry sweep disabled");
        None
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("HTTP server error")?;

    let stats = engine.shutdown();
    info!(
        "Server shutdown complete: {} keys dropped, hit rate {:.2}",
        stats.key_count,
        stats.hit_rate()
    );
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then stops the sweep.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Expiry sweep aborted");
    }
}
