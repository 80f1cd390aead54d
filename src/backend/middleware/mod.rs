//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - `AuthUser` extractor for routes that require a bearer token

pub mod auth;

pub use auth::{bearer_token, AuthUser};
