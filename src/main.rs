//! inkpost server entry point.
//!
//! Starts the Axum HTTP server serving the blog pages and JSON endpoints.

use std::time::Duration;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use inkpost::api;
use inkpost::app_state::AppState;
use inkpost::config::AppConfig;
use inkpost::persistence::EntryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, database = %config.database_url, "starting inkpost");

    // Open the store and create the schema if this is a fresh database
    let store = EntryStore::connect(&config).await?;
    store.init_schema().await?;

    // Build application state and router
    let state = AppState::new(store, &config);
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
