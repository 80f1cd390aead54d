/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /api/login.
 *
 * # Security
 *
 * - Invalid credentials return 401 with one message for both unknown NIK and
 *   wrong password
 * - Passwords and tokens are never logged
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::backend::auth::service::AuthService;
use crate::backend::error::ApiError;
use crate::shared::{LoginRequest, LoginResponse};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If NIK or password is missing
/// * `401 Unauthorized` - If the NIK is unknown or the password is wrong
/// * `500 Internal Server Error` - If the store lookup or token signing fails
///
/// # Example Response
///
/// ```json
/// { "message": "Login successful.", "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;
    tracing::info!("Login request for NIK: {}", request.nik);

    let token = auth.login(request).await?;

    Ok(Json(LoginResponse {
        message: "Login successful.".to_string(),
        token,
    }))
}
