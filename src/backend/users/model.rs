/**
 * Employee Row
 *
 * The stored shape of a row in the `Employee` table, including the bcrypt
 * hash. This type stays inside the backend; clients only ever receive the
 * [`EmployeeRecord`] projection.
 */

use crate::shared::{EmployeeRecord, Position};

/// Row of the `Employee` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Employee {
    /// National identity number, primary key
    pub nik: String,
    pub name: String,
    pub email: String,
    /// bcrypt hash, never plaintext
    pub password: String,
    #[sqlx(try_from = "String")]
    pub position: Position,
}

impl Employee {
    /// Public projection without the password hash
    pub fn to_record(&self) -> EmployeeRecord {
        EmployeeRecord {
            nik: self.nik.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            position: self.position,
        }
    }
}

impl From<Employee> for EmployeeRecord {
    fn from(employee: Employee) -> Self {
        EmployeeRecord {
            nik: employee.nik,
            name: employee.name,
            email: employee.email,
            position: employee.position,
        }
    }
}
