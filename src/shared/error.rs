//! Shared Error Types
//!
//! Field validation errors raised on either side of the wire, for example when
//! a position string is not one of the fixed set.
//!
//! # Usage
//!
//! ```rust
//! use employee_admin::shared::error::SharedError;
//!
//! let error = SharedError::validation("position", "Position must be one of: Senior Manager, Manager, Staff");
//! assert_eq!(error.user_message(), "Position must be one of: Senior Manager, Manager, Staff");
//! ```
use thiserror::Error;

/// Validation failure on an employee field
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Message without the field prefix, suitable for showing to a user
    pub fn user_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
