//! Health probe and fallback

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body!(body, 404, "Route not found");
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app.request(Method::GET, "/api/update", None, None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
