/**
 * Server Initialization
 *
 * This module handles the startup of the Axum application: connecting the
 * store, applying migrations, building state and configuring the router.
 *
 * # Initialization Process
 *
 * 1. Connect the shared connection pool
 * 2. Apply the embedded migrations
 * 3. Build `AppState` (repository + auth service)
 * 4. Create the router with tracing and CORS layers
 *
 * # Error Handling
 *
 * Startup is fail-fast: an unreachable store or a failed migration is
 * returned as a `StartupError` and the server does not start.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::Store;
use crate::shared::ConfigError;

/// Reasons the server can fail to start
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to connect to the database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Create and configure the Axum application
///
/// # Returns
///
/// The router ready to serve, and the store so the caller can close the
/// pool after shutdown.
pub async fn create_app(config: &ServerConfig) -> Result<(Router, Store), StartupError> {
    tracing::info!("Initializing employee admin backend");

    let store = Store::connect(&config.database).await?;
    store.migrate().await?;

    let users = store.user_repository(config.database.query_timeout);
    let app_state = AppState::new(users, &config.auth);

    let app = create_router(app_state, config.cors_origin.as_deref());
    tracing::info!("Router configured");

    Ok((app, store))
}
