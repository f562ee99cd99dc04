//! # catalogd — catalog daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository (adapter)
//! - Construct the application service, injecting the repository via its port
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use catalog_adapter_http_axum::router;
use catalog_adapter_http_axum::state::AppState;
use catalog_adapter_storage_sqlite_sqlx::{Config as DbConfig, SqliteProductRepository};
use catalog_app::services::product_service::ProductService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repository
    let product_repo = SqliteProductRepository::new(pool);

    // Service
    let product_service = ProductService::new(product_repo);

    // HTTP
    let state = AppState::new(product_service);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "catalogd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
    }
    tracing::info!("shutting down");
}
