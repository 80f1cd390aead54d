//! Authentication Handlers Module
//!
//! HTTP handlers for authentication endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/register - Employee registration
//! - **`login`** - POST /api/login - Credential check and token issue
//! - **`get_me`** - GET /api/me - Employee bound to the bearer token

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current employee handler
pub mod me;

pub use register::register;
pub use login::login;
pub use me::get_me;
