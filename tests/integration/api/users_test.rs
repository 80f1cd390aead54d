//! Employee list, update and delete tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use employee_admin::shared::Position;

use crate::common::{register_body, TestApp};

fn update_body(nik: &str, name: &str, email: &str, position: &str) -> serde_json::Value {
    json!({"nik": nik, "name": name, "email": email, "position": position})
}

#[tokio::test]
async fn test_list_users() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    app.register_alice().await;
    let (status, _) = app
        .post("/api/register", register_body("E002", "Bob", "b@x.com", "pw456", "Senior Manager"))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.get("/api/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"nik": "E001", "name": "Alice", "email": "a@x.com", "position": "Staff"},
            {"nik": "E002", "name": "Bob", "email": "b@x.com", "position": "Senior Manager"},
        ])
    );
    assert_no_password!(body);
}

#[tokio::test]
async fn test_update_to_manager() {
    let app = TestApp::new().await;
    app.register_alice().await;

    let (status, body) = app
        .put("/api/update", update_body("E001", "Alice", "a@x.com", "Manager"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User updated successfully");
    assert_eq!(body["updatedUser"]["position"], "Manager");

    let stored = app.db.users().find_by_nik("E001").await.unwrap().unwrap();
    assert_eq!(stored.position, Position::Manager);
}

#[tokio::test]
async fn test_update_accepts_post() {
    let app = TestApp::new().await;
    app.register_alice().await;

    let (status, body) = app
        .post("/api/update", update_body("E001", "Alice Smith", "alice@x.com", "Staff"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedUser"]["name"], "Alice Smith");
    assert_eq!(body["updatedUser"]["email"], "alice@x.com");
}

#[tokio::test]
async fn test_update_keeps_password() {
    let app = TestApp::new().await;
    app.register_alice().await;

    let (status, _) = app
        .put("/api/update", update_body("E001", "Alice", "a@x.com", "Manager"))
        .await;
    assert_eq!(status, StatusCode::OK);

    app.login("E001", "pw123").await;
}

#[tokio::test]
async fn test_update_unknown_nik_is_not_found() {
    let app = TestApp::new().await;
    app.register_alice().await;

    let (status, body) = app
        .put("/api/update", update_body("E404", "Ghost", "g@x.com", "Manager"))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body!(body, 404, "User not found");

    let all = app.db.users().find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].position, Position::Staff);
}

#[tokio::test]
async fn test_update_missing_fields() {
    let app = TestApp::new().await;
    app.register_alice().await;

    let (status, body) = app
        .put("/api/update", json!({"nik": "E001", "name": "Alice"}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body!(body, 400, "All fields are required to update a user");
}

#[tokio::test]
async fn test_update_cannot_change_password() {
    let app = TestApp::new().await;
    app.register_alice().await;

    let mut body = update_body("E001", "Alice", "a@x.com", "Staff");
    body["password"] = json!("hijacked");
    let (status, _) = app.put("/api/update", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    app.login("E001", "pw123").await;
}

#[tokio::test]
async fn test_delete_removes_one_row() {
    let app = TestApp::new().await;
    app.register_alice().await;
    app.post("/api/register", register_body("E002", "Bob", "b@x.com", "pw456", "Manager"))
        .await;
    assert_eq!(app.db.count().await, 2);

    let (status, body) = app.delete("/api/users/E001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "User with NIK E001 deleted successfully."}));

    let remaining = app.db.users().find_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].nik, "E002");
}

#[tokio::test]
async fn test_delete_unknown_nik_is_not_found() {
    let app = TestApp::new().await;
    app.register_alice().await;

    let (status, body) = app.delete("/api/users/E404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body!(body, 404, "User not found");
    assert_eq!(app.db.count().await, 1);
}

#[tokio::test]
async fn test_whitespace_nik_is_never_stored() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/register", register_body("  ", "Alice", "a@x.com", "pw123", "Staff"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body!(body, 400, "All fields are required.");
    assert_eq!(app.db.count().await, 0);
}

#[tokio::test]
async fn test_padded_nik_can_be_deleted() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/register", register_body(" E001", " Alice ", "a@x.com ", "pw123", "Staff"))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["newUser"]["nik"], "E001");
    assert_eq!(body["newUser"]["name"], "Alice");

    let (status, body) = app.delete("/api/users/%20E001").await;
    assert_eq!(status, StatusCode::OK, "delete failed: {}", body);
    assert_eq!(app.db.count().await, 0);
}

#[tokio::test]
async fn test_delete_whitespace_nik() {
    let app = TestApp::new().await;
    app.register_alice().await;

    let (status, body) = app.delete("/api/users/%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body!(body, 400, "NIK is required to delete the user.");
    assert_eq!(app.db.count().await, 1);
}

#[tokio::test]
async fn test_update_trims_fields() {
    let app = TestApp::new().await;
    app.register_alice().await;

    let (status, body) = app
        .put("/api/update", update_body(" E001 ", "Alice B ", " ab@x.com", "Manager"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedUser"]["nik"], "E001");

    let stored = app.db.users().find_by_nik("E001").await.unwrap().unwrap();
    assert_eq!(stored.name, "Alice B");
    assert_eq!(stored.email, "ab@x.com");
}

#[tokio::test]
async fn test_delete_without_nik() {
    let app = TestApp::new().await;

    let (status, body) = app.delete("/api/users/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body!(body, 400, "NIK is required to delete the user.");
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let app = TestApp::new().await;
    app.db.store().close().await;

    let (status, body) = app.get("/api/users").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_body!(body, 500, "Error fetching all users.");
}
