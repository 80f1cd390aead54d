//! Property-based tests for registration, login and storage

use std::future::Future;

use axum::http::StatusCode;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use employee_admin::shared::Position;

use crate::common::{login_body, register_body, TestApp, TestDatabase};

const POSITIONS: [&str; 3] = ["Senior Manager", "Manager", "Staff"];

fn nik() -> impl Strategy<Value = String> {
    "[A-Z][0-9]{3,8}"
}

fn name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,10}( [A-Z][a-z]{1,10})?"
}

fn email() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,10}@[a-z]{1,10}\\.com"
}

fn password() -> impl Strategy<Value = String> {
    "[!-~]{1,24}"
}

fn position() -> impl Strategy<Value = &'static str> {
    prop::sample::select(POSITIONS.to_vec())
}

/// Any non-blank value, valid or not
fn anything() -> impl Strategy<Value = String> {
    "\\S{1,16}"
}

fn block_on(test: impl Future<Output = Result<(), TestCaseError>>) -> Result<(), TestCaseError> {
    tokio::runtime::Runtime::new()
        .expect("Failed to create runtime")
        .block_on(test)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_registered_employee_can_log_in(
        nik in nik(),
        name in name(),
        email in email(),
        password in password(),
        position in position(),
    ) {
        block_on(async move {
            let app = TestApp::new().await;

            let (status, body) = app
                .post("/api/register", register_body(&nik, &name, &email, &password, position))
                .await;
            prop_assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
            prop_assert_eq!(body["newUser"]["nik"].as_str(), Some(nik.as_str()));

            let (status, body) = app.post("/api/login", login_body(&nik, &password)).await;
            prop_assert_eq!(status, StatusCode::OK, "login failed: {}", body);
            prop_assert!(body["token"].as_str().is_some_and(|token| !token.is_empty()));
            Ok(())
        })?;
    }

    #[test]
    fn test_existing_nik_always_conflicts(
        nik in nik(),
        name in anything(),
        email in anything(),
        password in anything(),
        position in anything(),
    ) {
        block_on(async move {
            let app = TestApp::new().await;
            let (status, _) = app
                .post("/api/register", register_body(&nik, "Alice", "a@x.com", "pw123", "Staff"))
                .await;
            prop_assert_eq!(status, StatusCode::CREATED);

            let (status, body) = app
                .post("/api/register", register_body(&nik, &name, &email, &password, &position))
                .await;
            prop_assert_eq!(status, StatusCode::BAD_REQUEST);
            prop_assert_eq!(&body["message"], "User already exists.");
            prop_assert_eq!(app.db.count().await, 1);
            Ok(())
        })?;
    }

    #[test]
    fn test_failed_logins_are_identical(
        nik in nik(),
        password in password(),
        attempt in password(),
    ) {
        block_on(async move {
            let app = TestApp::new().await;
            let (status, _) = app
                .post("/api/register", register_body(&nik, "Alice", "a@x.com", &password, "Staff"))
                .await;
            prop_assert_eq!(status, StatusCode::CREATED);

            let wrong = if attempt == password { format!("{}x", attempt) } else { attempt };
            let wrong_password = app.post("/api/login", login_body(&nik, &wrong)).await;
            let unknown_nik = app.post("/api/login", login_body(&format!("{}X", nik), &password)).await;

            prop_assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
            prop_assert_eq!(wrong_password, unknown_nik);
            Ok(())
        })?;
    }

    #[test]
    fn test_created_employee_reads_back_unchanged(
        nik in nik(),
        name in name(),
        email in email(),
        password in password(),
        position in position(),
    ) {
        let position: Position = position.parse().expect("generated position is valid");
        let hash = bcrypt::hash(&password, 4).expect("bcrypt hash");

        block_on(async move {
            let db = TestDatabase::new().await;
            let users = db.users();
            users
                .create(&nik, &name, &email, &hash, position)
                .await
                .map_err(|e| TestCaseError::fail(e.to_string()))?;

            let stored = users
                .find_by_nik(&nik)
                .await
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            let stored = stored.ok_or_else(|| TestCaseError::fail("employee not found"))?;

            prop_assert_eq!(&stored.nik, &nik);
            prop_assert_eq!(&stored.name, &name);
            prop_assert_eq!(&stored.email, &email);
            prop_assert_eq!(stored.position, position);
            prop_assert_ne!(&stored.password, &password);
            prop_assert!(bcrypt::verify(&password, &stored.password).unwrap_or(false));
            Ok(())
        })?;
    }
}
