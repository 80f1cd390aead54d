//! Database test fixtures
//!
//! Each `TestDatabase` is a private in-memory SQLite store with the schema
//! migrated, so tests never share rows.

use std::sync::Arc;
use std::time::Duration;

use employee_admin::backend::server::DatabaseConfig;
use employee_admin::backend::store::Store;
use employee_admin::backend::users::UserRepository;

/// Test database fixture
pub struct TestDatabase {
    store: Store,
}

impl TestDatabase {
    /// Create a new migrated in-memory database
    pub async fn new() -> Self {
        let store = Store::connect(&DatabaseConfig::from_url("sqlite::memory:"))
            .await
            .expect("Failed to create test database");
        store.migrate().await.expect("Failed to run migrations");
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Repository over this database
    pub fn users(&self) -> Arc<dyn UserRepository> {
        self.store.user_repository(Duration::from_secs(5))
    }

    /// Number of employees currently stored
    pub async fn count(&self) -> usize {
        self.users().find_all().await.expect("Failed to count employees").len()
    }
}
