//! Recall Cache - An instrumented key-value caching layer
//!
//! Serves the caching layer over HTTP, backed by the in-memory store or,
//! with the `redis` feature, by a live Redis server.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recall_cache::api::create_router;
use recall_cache::{AppState, Cache, Config, KeyValueStore, MemoryStore};

/// Main entry point for the caching layer server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the cache over the configured backend (flushes the namespace)
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recall_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Recall Cache");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, backend={}",
        config.server_port,
        if config.redis_url.is_some() {
            "redis"
        } else {
            "memory"
        }
    );

    #[cfg(feature = "redis")]
    if let Some(url) = config.redis_url.clone() {
        let store = recall_cache::store::RedisStore::connect(&url)
            .await
            .context("connecting to Redis")?;
        let cache = Cache::open(store).await.context("opening the cache")?;
        return serve(AppState::new(cache), config.server_port).await;
    }

    #[cfg(not(feature = "redis"))]
    if config.redis_url.is_some() {
        anyhow::bail!("REDIS_URL is set but this build was compiled without the redis feature");
    }

    let cache = Cache::open(MemoryStore::new())
        .await
        .context("opening the cache")?;
    serve(AppState::new(cache), config.server_port).await
}

/// Runs the HTTP server over an application state until shutdown.
async fn serve<S: KeyValueStore + 'static>(state: AppState<S>, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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
}
