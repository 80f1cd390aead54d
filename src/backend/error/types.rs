/**
 * Backend Error Types
 *
 * This module defines the error taxonomy shared by the repository, the auth
 * service and the HTTP handlers.
 *
 * # Error Categories
 *
 * - `InvalidArgument` - missing or malformed request fields (400)
 * - `Conflict` - a user with the same NIK already exists (400)
 * - `Unauthorized` - bad credentials or token (401)
 * - `NotFound` - the targeted employee does not exist (404)
 * - `PersistenceError` / `LookupError` - store failures on write / read (500)
 * - `Internal` - hashing or token signing failures (500)
 *
 * Store-level details are logged where the error is created; the message
 * carried here is what the client sees.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend error taxonomy
///
/// # Usage
///
/// ```rust
/// use employee_admin::backend::error::ApiError;
///
/// let err = ApiError::invalid_argument("All fields are required.");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Duplicate NIK on registration
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad credentials or token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Mutation or lookup target absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store failure while writing
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    /// Store failure while reading
    #[error("Lookup error: {0}")]
    LookupError(String),

    /// Failure outside the store (hashing, token signing)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Validation error from the shared types
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl ApiError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::PersistenceError(message.into())
    }

    pub fn lookup(message: impl Into<String>) -> Self {
        Self::LookupError(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidArgument`, `Conflict`, `SharedError` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `PersistenceError`, `LookupError`, `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) | Self::Conflict(_) | Self::SharedError(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PersistenceError(_) | Self::LookupError(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing message
    pub fn message(&self) -> String {
        match self {
            Self::InvalidArgument(message)
            | Self::Conflict(message)
            | Self::Unauthorized(message)
            | Self::NotFound(message)
            | Self::PersistenceError(message)
            | Self::LookupError(message)
            | Self::Internal(message) => message.clone(),
            Self::SharedError(err) => err.user_message().to_string(),
        }
    }
}
