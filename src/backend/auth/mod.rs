//! Authentication Module
//!
//! Registration, login and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── service.rs      - AuthService (bcrypt hashing, credential checks)
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── register.rs - Employee registration handler
//!     ├── login.rs    - Login handler
//!     └── me.rs       - Current employee handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: admin submits nik, name, email, password, position → password hashed → row created
//! 2. **Login**: nik and password → hash verified → JWT returned
//! 3. **Me**: JWT in `Authorization: Bearer` → token verified → employee returned
//!
//! Tokens expire after one hour.

/// Registration and login
pub mod service;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use service::AuthService;
pub use handlers::{get_me, login, register};
