//! Store Adapter
//!
//! Owns the single connection pool shared by every request for the lifetime
//! of the process. The pool is created once during startup from
//! [`DatabaseConfig`], handed to the repositories by value (pools are cheap
//! `Arc` handles) and closed by [`Store::close`] after the HTTP server has
//! drained.
//!
//! Two backends are supported:
//!
//! - **PostgreSQL** - the production store, built from `DB_*` parts or a
//!   `postgres://` URL. `DB_ENCRYPT=true` requires TLS.
//! - **SQLite** - selected by a `sqlite:` URL; used for local development and
//!   by the test-suite (`sqlite::memory:`).
//!
//! Every query goes through [`with_timeout`], so no request waits on the store
//! for longer than the configured query timeout.

use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};

use crate::backend::server::config::{DatabaseConfig, DatabaseTarget};
use crate::backend::users::postgres::PgUserRepository;
use crate::backend::users::sqlite::SqliteUserRepository;
use crate::backend::users::UserRepository;

static MIGRATOR: Migrator = sqlx::migrate!();

/// Shared connection pool
#[derive(Clone, Debug)]
pub enum Store {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl Store {
    /// Create the connection pool
    ///
    /// The first connection is opened eagerly so an unreachable store fails
    /// startup instead of the first request.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        match &config.target {
            DatabaseTarget::Url(url) if url.starts_with("sqlite:") => {
                tracing::info!("Connecting to SQLite store...");
                let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

                // Every connection to an in-memory database sees its own empty
                // database, so the pool must hold exactly one long-lived connection.
                let in_memory = url.contains(":memory:") || url.contains("mode=memory");
                let pool_options = if in_memory {
                    SqlitePoolOptions::new()
                        .max_connections(1)
                        .idle_timeout(None)
                        .max_lifetime(None)
                } else {
                    SqlitePoolOptions::new().max_connections(config.max_connections)
                };

                let pool = pool_options
                    .acquire_timeout(config.query_timeout)
                    .connect_with(options)
                    .await?;
                Ok(Store::Sqlite(pool))
            }
            DatabaseTarget::Url(url) => {
                tracing::info!("Connecting to PostgreSQL store...");
                let options = PgConnectOptions::from_str(url)?;
                Ok(Store::Postgres(Self::connect_postgres(config, options).await?))
            }
            DatabaseTarget::Postgres { host, port, user, password, database, encrypt } => {
                tracing::info!("Connecting to PostgreSQL store at {}:{}/{}...", host, port, database);
                let options = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .password(password)
                    .database(database)
                    .ssl_mode(if *encrypt { PgSslMode::Require } else { PgSslMode::Prefer });
                Ok(Store::Postgres(Self::connect_postgres(config, options).await?))
            }
        }
    }

    async fn connect_postgres(config: &DatabaseConfig, options: PgConnectOptions) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.query_timeout)
            .connect_with(options)
            .await
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        tracing::info!("Running database migrations...");
        match self {
            Store::Postgres(pool) => MIGRATOR.run(pool).await?,
            Store::Sqlite(pool) => MIGRATOR.run(pool).await?,
        }
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// Repository over the `Employee` table backed by this pool
    pub fn user_repository(&self, query_timeout: Duration) -> Arc<dyn UserRepository> {
        match self {
            Store::Postgres(pool) => Arc::new(PgUserRepository::new(pool.clone(), query_timeout)),
            Store::Sqlite(pool) => Arc::new(SqliteUserRepository::new(pool.clone(), query_timeout)),
        }
    }

    /// Close the pool, waiting for checked-out connections to be returned
    pub async fn close(&self) {
        match self {
            Store::Postgres(pool) => pool.close().await,
            Store::Sqlite(pool) => pool.close().await,
        }
        tracing::info!("Store connection pool closed");
    }
}

/// Run a store operation under a deadline
///
/// An expired deadline is reported as an I/O timeout so callers handle it like
/// any other store failure.
pub async fn with_timeout<T, F>(timeout: Duration, operation: F) -> Result<T, sqlx::Error>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result,
        Err(_) => Err(sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            format!("query exceeded {:?}", timeout),
        ))),
    }
}
