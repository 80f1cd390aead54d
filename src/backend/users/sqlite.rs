/**
 * SQLite User Repository
 *
 * `UserRepository` over a `SqlitePool`, using `?` placeholders. Backs local
 * development and the test-suite.
 */

use sqlx::SqlitePool;

use crate::backend::users::sql::{sql_user_repository, Queries};

sql_user_repository!(
    /// Employees stored in SQLite
    SqliteUserRepository,
    SqlitePool,
    Queries {
        find_by_nik: "SELECT nik, name, email, password, position FROM Employee WHERE nik = ?",
        find_all: "SELECT nik, name, email, password, position FROM Employee ORDER BY nik",
        insert: "INSERT INTO Employee (nik, name, email, password, position) VALUES (?, ?, ?, ?, ?)",
        update: "UPDATE Employee SET name = ?, email = ?, position = ? WHERE nik = ?",
        delete: "DELETE FROM Employee WHERE nik = ?",
    }
);
