/**
 * Register Handler
 *
 * This module implements the employee registration handler for
 * POST /api/register.
 *
 * # Validation
 *
 * - nik, name, email, password and position are all required
 * - Email must contain '@' character (basic validation)
 * - Position must be one of `Senior Manager`, `Manager`, `Staff`
 * - NIK must not already be registered
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::backend::auth::service::AuthService;
use crate::backend::error::ApiError;
use crate::shared::{RegisterRequest, RegisterResponse};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If a field is missing or invalid, or the NIK already exists
/// * `500 Internal Server Error` - If hashing or the store insert fails
///
/// # Example Request
///
/// ```http
/// POST /api/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "nik": "E001",
///   "name": "Alice",
///   "email": "a@x.com",
///   "password": "pw123",
///   "position": "Staff"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "message": "User registered successfully.",
///   "newUser": { "nik": "E001", "name": "Alice", "email": "a@x.com", "position": "Staff" }
/// }
/// ```
pub async fn register(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Json(request) = payload?;
    tracing::info!("Register request for NIK: {}", request.nik);

    let new_user = auth.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully.".to_string(),
            new_user,
        }),
    ))
}
