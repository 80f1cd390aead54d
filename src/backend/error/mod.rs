//! Backend Error Module
//!
//! Error taxonomy for the employee API and its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and extractor rejection mapping
//! ```
//!
//! Handlers return `Result<_, ApiError>`; the repository and the auth service
//! produce the same type, so errors flow to the client with `?` and are mapped
//! to 400/401/404/500 in one place.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
