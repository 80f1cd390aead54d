//! Common test utilities and helpers
//!
//! - In-memory database fixture
//! - In-process HTTP client for the router
//! - Authentication helpers
//! - Custom assertion macros

#[macro_use]
pub mod assertions;
pub mod database;

pub use auth_helpers::*;
pub use client::*;
pub use database::*;
