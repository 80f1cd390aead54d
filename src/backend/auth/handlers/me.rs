/**
 * Current Employee Handler
 *
 * GET /api/me returns the employee bound to the bearer token. The token is
 * checked by the [`AuthUser`] extractor before this handler runs.
 */

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::users::UserRepository;
use crate::shared::EmployeeRecord;

/// Get current employee handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the token is missing, malformed or expired
/// * `404 Not Found` - If the employee was deleted after the token was issued
pub async fn get_me(
    AuthUser { nik }: AuthUser,
    State(users): State<Arc<dyn UserRepository>>,
) -> Result<Json<EmployeeRecord>, ApiError> {
    let employee = users.find_by_nik(&nik).await?.ok_or_else(|| {
        tracing::warn!("Token for {} refers to a deleted employee", nik);
        ApiError::not_found("User not found")
    })?;

    Ok(Json(employee.into()))
}
