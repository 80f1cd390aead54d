/**
 * Authentication Extractor
 *
 * Protects routes that require a signed-in employee. The JWT is read from
 * the `Authorization: Bearer <token>` header and verified against the
 * process-wide secret; the NIK from its claims is handed to the handler.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::backend::auth::AuthService;
use crate::backend::error::ApiError;

/// Authenticated employee extracted from the bearer token
///
/// Rejects with 401 when the header is missing, not a bearer token, or the
/// token fails verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub nik: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let auth = Arc::<AuthService>::from_ref(state);
        let claims = auth.verify(token)?;

        Ok(AuthUser { nik: claims.nik })
    }
}

/// Extract the token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthorized("Authorization token is required.")
        })?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            ApiError::unauthorized("Authorization header must be 'Bearer <token>'.")
        })
}
