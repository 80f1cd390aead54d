//! Registration, login and token tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use employee_admin::shared::Position;

use crate::common::{alice, login_body, register_body, TestApp};

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/register", alice()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully.");
    assert_eq!(
        body["newUser"],
        json!({"nik": "E001", "name": "Alice", "email": "a@x.com", "position": "Staff"})
    );
    assert_no_password!(body);

    let (status, body) = app.post("/api/login", login_body("E001", "pw123")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful.");
    assert!(body["token"].as_str().is_some_and(|token| token.split('.').count() == 3));

    let (status, body) = app.post("/api/login", login_body("E001", "wrong")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error_body!(body, 401, "Invalid NIK or Password.");
}

#[tokio::test]
async fn test_register_stores_hash_not_plaintext() {
    let app = TestApp::new().await;
    app.register_alice().await;

    let stored = app.db.users().find_by_nik("E001").await.unwrap().unwrap();
    assert_eq!(stored.name, "Alice");
    assert_eq!(stored.email, "a@x.com");
    assert_eq!(stored.position, Position::Staff);
    assert_ne!(stored.password, "pw123");
    assert!(bcrypt::verify("pw123", &stored.password).unwrap());
}

#[tokio::test]
async fn test_register_existing_nik_conflicts() {
    let app = TestApp::new().await;
    app.register_alice().await;

    let other = register_body("E001", "Bob", "b@x.com", "other", "Manager");
    let (status, body) = app.post("/api/register", other).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body!(body, 400, "User already exists.");
    assert_eq!(app.db.count().await, 1);

    let stored = app.db.users().find_by_nik("E001").await.unwrap().unwrap();
    assert_eq!(stored.name, "Alice");
}

#[tokio::test]
async fn test_register_existing_nik_conflicts_before_field_checks() {
    let app = TestApp::new().await;
    app.register_alice().await;

    for body in [
        register_body("E001", "Alice", "a@x.com", "pw123", "Intern"),
        register_body("E001", "Alice", "no-at-sign", "pw123", "Staff"),
    ] {
        let (status, body) = app.post("/api/register", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error_body!(body, 400, "User already exists.");
    }
    assert_eq!(app.db.count().await, 1);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/register", json!({"nik": "E001", "name": "Alice", "email": "a@x.com"}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body!(body, 400, "All fields are required.");
    assert_eq!(app.db.count().await, 0);
}

#[tokio::test]
async fn test_register_rejects_unknown_position() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/register", register_body("E001", "Alice", "a@x.com", "pw123", "Intern"))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body!(body, 400, "Position must be one of: Senior Manager, Manager, Staff");
}

#[tokio::test]
async fn test_register_rejects_unknown_fields() {
    let app = TestApp::new().await;

    let mut body = alice();
    body["role"] = json!("admin");
    let (status, body) = app.post("/api/register", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new().await;

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/login")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/login", json!({"nik": "E001"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body!(body, 400, "NIK and Password are required.");
}

#[tokio::test]
async fn test_login_failures_are_identical() {
    let app = TestApp::new().await;
    app.register_alice().await;

    let wrong_password = app.post("/api/login", login_body("E001", "nope")).await;
    let unknown_nik = app.post("/api/login", login_body("E999", "pw123")).await;

    assert_eq!(wrong_password, unknown_nik);
}

#[tokio::test]
async fn test_me_returns_signed_in_employee() {
    let app = TestApp::new().await;
    app.register_alice().await;
    let token = app.login("E001", "pw123").await;

    let (status, body) = app.request(Method::GET, "/api/me", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nik"], "E001");
    assert_no_password!(body);
}

#[tokio::test]
async fn test_me_requires_valid_token() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], 401);

    let (status, _) = app.request(Method::GET, "/api/me", None, Some("not.a.token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_after_delete_is_not_found() {
    let app = TestApp::new().await;
    app.register_alice().await;
    let token = app.login("E001", "pw123").await;

    let (status, _) = app.delete("/api/users/E001").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.request(Method::GET, "/api/me", None, Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body!(body, 404, "User not found");
}
