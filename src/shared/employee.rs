//! Employee Types
//!
//! Wire types for the employee administration API. These are shared by the
//! axum backend and the egui admin client so both sides agree on field names
//! (`nik`, `name`, `email`, `password`, `position`) and on the fixed set of
//! positions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Job position of an employee
///
/// Serialized as the exact display strings stored in the `Employee` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Senior Manager")]
    SeniorManager,
    #[serde(rename = "Manager")]
    Manager,
    #[serde(rename = "Staff")]
    Staff,
}

impl Position {
    /// Every position, in the order the admin UI lists them
    pub const ALL: [Position; 3] = [Position::SeniorManager, Position::Manager, Position::Staff];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::SeniorManager => "Senior Manager",
            Position::Manager => "Manager",
            Position::Staff => "Staff",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                SharedError::validation(
                    "position",
                    "Position must be one of: Senior Manager, Manager, Staff",
                )
            })
    }
}

impl TryFrom<String> for Position {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Employee as returned to clients
///
/// This is the public projection of a row in `Employee`. It never carries the
/// password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub nik: String,
    pub name: String,
    pub email: String,
    pub position: Position,
}

/// Body of `POST /api/register`
///
/// Missing fields deserialize as empty strings so the handler can answer with
/// a 400 and a readable message instead of a bare extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    #[serde(default)]
    pub nik: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub position: String,
}

/// Body of `POST /api/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[serde(default)]
    pub nik: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `POST|PUT /api/update`
///
/// Only name, email and position are mutable; `nik` selects the row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateRequest {
    #[serde(default)]
    pub nik: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub position: String,
}

/// Response of `POST /api/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "newUser")]
    pub new_user: EmployeeRecord,
}

/// Response of `POST /api/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Response of `POST|PUT /api/update`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub message: String,
    #[serde(rename = "updatedUser")]
    pub updated_user: EmployeeRecord,
}

/// Plain `{ "message": ... }` body used for confirmations and errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
