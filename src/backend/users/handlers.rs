/**
 * Employee Handlers
 *
 * HTTP handlers for reading and mutating employees.
 *
 * # Endpoints
 *
 * - `GET /api/users` - every employee, without password hashes
 * - `POST|PUT /api/update` - overwrite name, email and position of one employee
 * - `DELETE /api/users/{nik}` - remove one employee
 *
 * Update and delete both answer 404 when the NIK does not exist. NIKs, names
 * and emails are trimmed on the way in, the same way registration stores them.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::backend::error::ApiError;
use crate::backend::users::repository::is_blank;
use crate::backend::users::UserRepository;
use crate::shared::{EmployeeRecord, MessageResponse, Position, UpdateRequest, UpdateResponse};

/// List all employees
///
/// # Errors
///
/// * `500 Internal Server Error` - If the store query fails
pub async fn list_users(
    State(users): State<Arc<dyn UserRepository>>,
) -> Result<Json<Vec<EmployeeRecord>>, ApiError> {
    let employees = users.find_all().await?;
    tracing::info!("Listed {} employees", employees.len());

    Ok(Json(employees.into_iter().map(EmployeeRecord::from).collect()))
}

/// Update an employee
///
/// # Example Request
///
/// ```http
/// PUT /api/update HTTP/1.1
/// Content-Type: application/json
///
/// {"nik": "E001", "name": "Alice", "email": "a@x.com", "position": "Manager"}
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - If a field is missing or the position is unknown
/// * `404 Not Found` - If no employee has this NIK
/// * `500 Internal Server Error` - If the store update fails
pub async fn update_user(
    State(users): State<Arc<dyn UserRepository>>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let Json(request) = payload?;
    let (nik, name, email) = (request.nik.trim(), request.name.trim(), request.email.trim());

    if [nik, name, email, request.position.as_str()].into_iter().any(is_blank) {
        tracing::warn!("Update rejected: missing fields");
        return Err(ApiError::invalid_argument("All fields are required to update a user"));
    }

    let position: Position = request.position.parse()?;
    let updated = users.update(nik, name, email, position).await?;

    tracing::info!("Updated employee {}", updated.nik);

    Ok(Json(UpdateResponse {
        message: "User updated successfully".to_string(),
        updated_user: updated,
    }))
}

/// Delete an employee by NIK
///
/// # Errors
///
/// * `400 Bad Request` - If the NIK is empty
/// * `404 Not Found` - If no employee has this NIK
/// * `500 Internal Server Error` - If the store delete fails
pub async fn delete_user(
    State(users): State<Arc<dyn UserRepository>>,
    Path(nik): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let nik = nik.trim();
    users.delete(nik).await?;

    Ok(Json(MessageResponse {
        message: format!("User with NIK {} deleted successfully.", nik),
    }))
}

/// `DELETE /api/users/` with no NIK segment
pub async fn delete_user_missing_nik() -> ApiError {
    ApiError::invalid_argument("NIK is required to delete the user.")
}
