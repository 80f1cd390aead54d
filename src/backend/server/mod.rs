//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (store, auth, CORS)
//! └── init.rs         - Startup and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env` after `.env` is applied
//! 2. **Store**: connect the pool and run migrations, failing fast on error
//! 3. **State Creation**: repository and auth service behind `Arc`
//! 4. **Router Creation**: routes, tracing and CORS layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use state::AppState;
pub use config::{AuthConfig, DatabaseConfig, DatabaseTarget, ServerConfig};
pub use init::{create_app, StartupError};
