//! Custom assertion macros
//!
//! Assertions on the JSON bodies the API returns.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert an error body: `{"message": <message>, "status": <status>}`
#[macro_export]
macro_rules! assert_error_body {
    ($body:expr, $status:expr, $message:expr) => {{
        let body: &serde_json::Value = &$body;
        assert_eq!(body["message"], $message, "unexpected error body: {}", body);
        assert_eq!(body["status"], $status, "unexpected error body: {}", body);
    }};
}

/// Assert that a JSON value never exposes a password field
#[macro_export]
macro_rules! assert_no_password {
    ($value:expr) => {{
        let text = $value.to_string();
        assert!(!text.contains("password"), "password leaked in: {}", text);
    }};
}
