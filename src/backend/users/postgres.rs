/**
 * PostgreSQL User Repository
 *
 * `UserRepository` over a `PgPool`, using `$n` placeholders.
 */

use sqlx::PgPool;

use crate::backend::users::sql::{sql_user_repository, Queries};

sql_user_repository!(
    /// Employees stored in PostgreSQL
    PgUserRepository,
    PgPool,
    Queries {
        find_by_nik: "SELECT nik, name, email, password, position FROM Employee WHERE nik = $1",
        find_all: "SELECT nik, name, email, password, position FROM Employee ORDER BY nik",
        insert: "INSERT INTO Employee (nik, name, email, password, position) VALUES ($1, $2, $3, $4, $5)",
        update: "UPDATE Employee SET name = $1, email = $2, position = $3 WHERE nik = $4",
        delete: "DELETE FROM Employee WHERE nik = $1",
    }
);
