/**
 * API Routes
 *
 * All employee and authentication endpoints live under `/api`.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/register` - Register an employee
 * - `POST /api/login` - Exchange NIK and password for a token
 * - `GET /api/me` - Employee bound to the bearer token
 *
 * ## Employees
 * - `GET /api/users` - List employees
 * - `POST|PUT /api/update` - Update name, email and position
 * - `DELETE /api/users/{nik}` - Delete an employee
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::server::state::AppState;
use crate::backend::users::{delete_user, delete_user_missing_nik, list_users, update_user};

/// Configure API routes
///
/// Only `/api/me` requires authentication; it is enforced by the `AuthUser`
/// extractor in the handler signature.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/me", get(get_me))
        .route("/api/users", get(list_users))
        .route("/api/update", post(update_user).put(update_user))
        .route("/api/users/", delete(delete_user_missing_nik))
        .route("/api/users/{nik}", delete(delete_user))
}
