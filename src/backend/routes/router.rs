/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * API routes, the health probe and the JSON 404 fallback, and applies the
 * tracing and CORS layers.
 */

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::error::ApiError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Repository and auth service
/// * `cors_origin` - Allowed browser origin; `None` allows any origin
///
/// # Route Details
///
/// - `/api/...` - see [`configure_api_routes`]
/// - `GET /health` - liveness probe
/// - anything else - `404 {"message": "Route not found", "status": 404}`
pub fn create_router(app_state: AppState, cors_origin: Option<&str>) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_api_routes(router);

    router
        .fallback(|| async { ApiError::not_found("Route not found") })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors_origin)),
        )
        .with_state(app_state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// CORS for the given origin, or any origin when unset or unparsable
pub fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    match origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => layer.allow_origin(origin),
        Some(Err(e)) => {
            tracing::warn!("Ignoring invalid CORS_ORIGIN: {}", e);
            layer.allow_origin(Any)
        }
        None => layer.allow_origin(Any),
    }
}
