//! Employee Admin - Main Library
//!
//! Employee Admin is a small administration tool for employee records keyed by
//! national identity number (NIK). It consists of a JSON REST API backed by a
//! single relational table and a native desktop admin client.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and backend
//!   - Employee wire types and the fixed `Position` set
//!   - Client configuration
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Axum HTTP server and routes
//!   - Store adapter (PostgreSQL or SQLite connection pool)
//!   - User repository and auth service (bcrypt + JWT)
//!
//! - **`egui_app`** - Native admin client (only compiled with the `ui` feature)
//!   - Login screen
//!   - Employee table with add/edit/delete dialogs
//!
//! # Usage
//!
//! ```rust,no_run
//! use employee_admin::backend::server::config::ServerConfig;
//! use employee_admin::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let (app, store) = create_app(&config).await?;
//! // Serve `app` with axum, then `store.close().await` on shutdown
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native admin client
#[cfg(feature = "ui")]
pub mod egui_app;
