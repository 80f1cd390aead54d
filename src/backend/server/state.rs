/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the two services every handler needs:
 * - the user repository, backed by the shared store pool
 * - the auth service (bcrypt cost and token keys)
 *
 * Both are behind `Arc`, so cloning the state per request is cheap and the
 * handlers never create their own pools.
 *
 * # Example
 *
 * ```rust,no_run
 * use std::sync::Arc;
 * use axum::extract::State;
 * use employee_admin::backend::users::UserRepository;
 *
 * async fn handler(State(users): State<Arc<dyn UserRepository>>) {
 *     let _ = users.find_all().await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::AuthService;
use crate::backend::server::config::AuthConfig;
use crate::backend::users::UserRepository;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Employee storage
    pub users: Arc<dyn UserRepository>,
    /// Registration, login and token verification
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Build the state around a repository
    ///
    /// The auth service shares the same repository instance.
    pub fn new(users: Arc<dyn UserRepository>, auth_config: &AuthConfig) -> Self {
        let auth = Arc::new(AuthService::new(users.clone(), auth_config));
        Self { users, auth }
    }
}

impl FromRef<AppState> for Arc<dyn UserRepository> {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
