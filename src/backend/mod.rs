//! Backend Module
//!
//! All server-side code for the employee admin API. Only compiled when the
//! `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, startup
//! - **`routes`** - Route configuration and router assembly
//! - **`store`** - Shared connection pool (PostgreSQL or SQLite) and migrations
//! - **`users`** - Employee repository and list/update/delete handlers
//! - **`auth`** - Registration, login, JWT session tokens
//! - **`middleware`** - Bearer token extractor
//! - **`error`** - `ApiError` taxonomy and its HTTP mapping
//!
//! # Request Flow
//!
//! handler → `AuthService` or `UserRepository` → `Store` pool → JSON
//! response. Every failure becomes an `ApiError` whose status and message
//! are rendered by its `IntoResponse` impl.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Connection pool and migrations
pub mod store;

/// Employee storage and handlers
pub mod users;

/// Authentication and session tokens
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

pub use server::{create_app, AppState, ServerConfig};
pub use error::ApiError;
pub use store::Store;
