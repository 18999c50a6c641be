//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, counter store selection, worker spawning,
//! and the Axum server lifecycle including graceful shutdown.

use crate::config::{Config, mask_connection_string};
use crate::domain::click_worker::run_click_worker;
use crate::domain::repositories::ClickCounterStore;
use crate::infrastructure::counter::{MemoryCounterStore, RedisCounterStore};
use crate::infrastructure::persistence::PgLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// How long shutdown waits for queued clicks to be counted.
const CLICK_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (retried with exponential backoff)
/// - Migrations
/// - Click counter store (Redis, or in-memory fallback)
/// - Background click worker
/// - Axum HTTP server
///
/// On Ctrl-C / SIGTERM the server stops accepting requests, the click queue
/// closes, and the worker gets [`CLICK_DRAIN_TIMEOUT`] to finish before the
/// pool is closed.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let counter_store = connect_counter_store(&config).await;

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    let worker = tokio::spawn(run_click_worker(
        click_rx,
        counter_store.clone(),
        config.click_worker_concurrency,
    ));
    tracing::info!("Click worker started");

    let link_repository = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let state = AppState::new(
        link_repository,
        counter_store,
        click_tx,
        config.leaderboard_limit,
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router (and every click sender it held) is gone; the worker drains and exits.
    match tokio::time::timeout(CLICK_DRAIN_TIMEOUT, worker).await {
        Ok(Ok(())) => tracing::info!("Pending clicks flushed"),
        Ok(Err(e)) => tracing::error!("Click worker panicked: {}", e),
        Err(_) => tracing::warn!("Timed out waiting for pending clicks, dropping the rest"),
    }

    pool.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

/// Opens the PgPool, retrying transient failures at startup.
async fn connect_database(config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries - 1);

    Retry::spawn(strategy, || {
        let options = options.clone();
        let database_url = config.database_url.clone();
        async move {
            options
                .connect(&database_url)
                .await
                .inspect_err(|e| tracing::warn!("Database connection attempt failed: {}", e))
        }
    })
    .await
    .with_context(|| {
        format!(
            "Failed to connect to {}",
            mask_connection_string(&config.database_url)
        )
    })
}

/// Picks Redis when configured and reachable, otherwise in-memory counters.
async fn connect_counter_store(config: &Config) -> Arc<dyn ClickCounterStore> {
    let Some(redis_url) = &config.redis_url else {
        tracing::warn!("Redis not configured; click counters are in-memory and per-process");
        return Arc::new(MemoryCounterStore::new());
    };

    match RedisCounterStore::connect(redis_url, config.metrics_key.clone()).await {
        Ok(store) => {
            tracing::info!("Click counters enabled (Redis)");
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to connect to Redis: {}. Using in-memory click counters.",
                e
            );
            Arc::new(MemoryCounterStore::new())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
