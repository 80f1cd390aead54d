//! Employee Module
//!
//! Storage and HTTP handling for employee records.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs        - Module exports
//! ├── model.rs      - Stored row type
//! ├── repository.rs - UserRepository trait and shared validation
//! ├── sql.rs        - Implementation shared by the sqlx backends
//! ├── postgres.rs   - PostgreSQL statements
//! ├── sqlite.rs     - SQLite statements
//! └── handlers.rs   - List, update and delete handlers
//! ```

/// Stored row type
pub mod model;

/// Repository trait
pub mod repository;

/// Shared sqlx implementation
mod sql;

/// PostgreSQL repository
pub mod postgres;

/// SQLite repository
pub mod sqlite;

/// HTTP handlers
pub mod handlers;

pub use model::Employee;
pub use repository::UserRepository;
pub use handlers::{delete_user, delete_user_missing_nik, list_users, update_user};
