//! Quote Board - Main Application Entry Point
//!
//! A small personal web service that stores attributed quotes behind a single
//! shared password. Logging in with the password yields a fixed token, and the
//! quote endpoints require that token in the `Authorization` header.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: SQLite with sqlx (one pooled connection per request)
//! - **Authentication**: shared secret, token is its SHA-256 hex digest
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Derive the expected token from the shared secret
//! 3. Create database connection pool
//! 4. Ensure the schema exists
//! 5. Build HTTP router with routes and middleware
//! 6. Start server on configured port

mod app;
mod config;
mod db;
mod error;
mod extract;
mod handlers;
mod middleware;
mod models;
mod services;
mod state;

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::{services::credentials::CredentialService, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let credentials = CredentialService::from_config(config.password.as_deref());

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!(database_url = %config.database_url, "Database pool created");

    db::ensure_schema(&pool).await?;
    tracing::info!("Database schema ready");

    let app = app::router(
        AppState::new(pool, credentials),
        Path::new(&config.static_dir),
    );

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
