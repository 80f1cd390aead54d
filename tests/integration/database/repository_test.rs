//! Repository behaviour against a migrated SQLite store

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use employee_admin::backend::error::ApiError;
use employee_admin::shared::Position;

use crate::common::TestDatabase;

#[tokio::test]
async fn test_create_then_find_returns_input() {
    let db = TestDatabase::new().await;
    let users = db.users();

    let hash = bcrypt::hash("pw123", 4).unwrap();
    let created = assert_ok!(users.create("E001", "Alice", "a@x.com", &hash, Position::Staff).await);
    assert_eq!(created.nik, "E001");

    let stored = users.find_by_nik("E001").await.unwrap().unwrap();
    assert_eq!(stored.nik, "E001");
    assert_eq!(stored.name, "Alice");
    assert_eq!(stored.email, "a@x.com");
    assert_eq!(stored.position, Position::Staff);
    assert_eq!(stored.password, hash);
}

#[tokio::test]
async fn test_find_all_is_ordered_by_nik() {
    let db = TestDatabase::new().await;
    let users = db.users();

    for nik in ["E003", "E001", "E002"] {
        users.create(nik, "Someone", "s@x.com", "hash", Position::Staff).await.unwrap();
    }

    let niks: Vec<String> = users.find_all().await.unwrap().into_iter().map(|e| e.nik).collect();
    assert_eq!(niks, vec!["E001", "E002", "E003"]);
}

#[tokio::test]
async fn test_create_requires_all_fields() {
    let db = TestDatabase::new().await;

    let err = db.users().create("E001", "Alice", "", "hash", Position::Staff).await.unwrap_err();
    assert_matches!(err, ApiError::InvalidArgument(ref m) if m == "All fields are required to create a user.");
    assert_eq!(db.count().await, 0);
}

#[tokio::test]
async fn test_update_requires_all_fields() {
    let db = TestDatabase::new().await;

    let err = db.users().update("E001", "", "a@x.com", Position::Manager).await.unwrap_err();
    assert_matches!(err, ApiError::InvalidArgument(_));
}

#[tokio::test]
async fn test_lookup_without_nik() {
    let db = TestDatabase::new().await;

    let err = db.users().find_by_nik("").await.unwrap_err();
    assert_matches!(err, ApiError::InvalidArgument(ref m) if m == "NIK is required to fetch user.");
}

#[tokio::test]
async fn test_closed_store_reports_lookup_and_persistence_errors() {
    let db = TestDatabase::new().await;
    let users = db.users();
    db.store().close().await;

    assert_matches!(users.find_all().await, Err(ApiError::LookupError(_)));
    assert_matches!(users.find_by_nik("E001").await, Err(ApiError::LookupError(_)));
    assert_matches!(
        users.create("E001", "Alice", "a@x.com", "hash", Position::Staff).await,
        Err(ApiError::PersistenceError(_))
    );
    assert_matches!(users.delete("E001").await, Err(ApiError::PersistenceError(_)));
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = TestDatabase::new().await;
    db.users().create("E001", "Alice", "a@x.com", "hash", Position::Staff).await.unwrap();

    db.store().migrate().await.unwrap();
    assert_eq!(db.count().await, 1);
}
