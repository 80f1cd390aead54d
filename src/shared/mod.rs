//! Shared Module
//!
//! Types shared between the axum backend and the egui admin client. Everything
//! here is plain data plus validation and is compiled for every feature set.

/// Employee wire types and positions
pub mod employee;

/// Shared error types
pub mod error;

/// Client configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use employee::{
    EmployeeRecord, LoginRequest, LoginResponse, MessageResponse, Position, RegisterRequest,
    RegisterResponse, UpdateRequest, UpdateResponse,
};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
