//! Integration tests
//!
//! - `api` - HTTP endpoints through the router
//! - `database` - store and repository against a real SQLite database
//! - `config_test` - environment configuration and startup

mod api;
mod database;
