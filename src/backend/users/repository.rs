/**
 * User Repository
 *
 * The persistence port for employees. Every operation is one parameterized
 * statement against the `Employee` table; implementations exist for
 * PostgreSQL and SQLite and are selected by the store adapter.
 *
 * # Errors
 *
 * - Empty or whitespace-only required fields are `InvalidArgument` and never
 *   reach the store
 * - Reads that fail in the store are `LookupError`
 * - Writes that fail in the store (including constraint violations) are
 *   `PersistenceError`
 * - `update` and `delete` that match no row are `NotFound`
 *
 * The underlying store error is logged here and never returned to clients.
 */

use async_trait::async_trait;

use crate::backend::error::ApiError;
use crate::backend::users::model::Employee;
use crate::shared::{EmployeeRecord, Position};

pub(crate) const USER_NOT_FOUND: &str = "User not found";
pub(crate) const USER_EXISTS: &str = "User already exists.";

/// Storage operations on employees
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Full row for `nik`, or `None` if absent
    async fn find_by_nik(&self, nik: &str) -> Result<Option<Employee>, ApiError>;

    /// Every employee, ordered by NIK
    async fn find_all(&self) -> Result<Vec<Employee>, ApiError>;

    /// Insert one employee; the password must already be hashed
    async fn create(
        &self,
        nik: &str,
        name: &str,
        email: &str,
        hashed_password: &str,
        position: Position,
    ) -> Result<EmployeeRecord, ApiError>;

    /// Overwrite name, email and position of `nik`
    async fn update(
        &self,
        nik: &str,
        name: &str,
        email: &str,
        position: Position,
    ) -> Result<EmployeeRecord, ApiError>;

    /// Remove `nik` permanently
    async fn delete(&self, nik: &str) -> Result<(), ApiError>;
}

/// A field holding nothing but whitespace counts as missing
pub(crate) fn is_blank(field: &str) -> bool {
    field.trim().is_empty()
}

pub(crate) fn require_nik_for_lookup(nik: &str) -> Result<(), ApiError> {
    if is_blank(nik) {
        return Err(ApiError::invalid_argument("NIK is required to fetch user."));
    }
    Ok(())
}

pub(crate) fn require_create_fields(nik: &str, name: &str, email: &str, hashed_password: &str) -> Result<(), ApiError> {
    if [nik, name, email, hashed_password].into_iter().any(is_blank) {
        return Err(ApiError::invalid_argument("All fields are required to create a user."));
    }
    Ok(())
}

pub(crate) fn require_update_fields(nik: &str, name: &str, email: &str) -> Result<(), ApiError> {
    if [nik, name, email].into_iter().any(is_blank) {
        return Err(ApiError::invalid_argument(
            "NIK, Name, Email, and Position are required to update a user.",
        ));
    }
    Ok(())
}

pub(crate) fn require_nik_for_delete(nik: &str) -> Result<(), ApiError> {
    if is_blank(nik) {
        return Err(ApiError::invalid_argument("NIK is required to delete the user."));
    }
    Ok(())
}

/// Log a failed read and normalize it
pub(crate) fn lookup_failed(context: &'static str, err: sqlx::Error) -> ApiError {
    tracing::error!("{}: {}", context, err);
    ApiError::lookup(context)
}

/// Log a failed write and normalize it
pub(crate) fn persistence_failed(context: &'static str, err: sqlx::Error) -> ApiError {
    tracing::error!("{}: {}", context, err);
    ApiError::persistence(context)
}
