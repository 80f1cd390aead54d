/**
 * Shared Types Module
 *
 * View states, the employee form, notifications and the results background
 * requests report back to the UI thread.
 */

use crate::shared::{EmployeeRecord, Position, RegisterRequest, UpdateRequest};

/// Current app view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login screen
    Login,
    /// Employee table
    Users,
}

/// Whether the form creates or edits an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// Add / edit employee form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    pub mode: FormMode,
    pub nik: String,
    pub name: String,
    pub email: String,
    /// Only collected when adding
    pub password: String,
    pub position: Position,
}

impl EmployeeForm {
    /// Empty form for a new employee
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            nik: String::new(),
            name: String::new(),
            email: String::new(),
            password: String::new(),
            position: Position::Staff,
        }
    }

    /// Form pre-filled from an existing employee; the NIK is not editable
    pub fn edit(record: &EmployeeRecord) -> Self {
        Self {
            mode: FormMode::Edit,
            nik: record.nik.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            password: String::new(),
            position: record.position,
        }
    }

    /// Client-side required field check
    pub fn validate(&self) -> Result<(), &'static str> {
        let mut required = vec![&self.nik, &self.name, &self.email];
        if self.mode == FormMode::Add {
            required.push(&self.password);
        }

        if required.iter().any(|field| field.trim().is_empty()) {
            return Err("Please fill in all required fields.");
        }
        Ok(())
    }

    pub fn to_register_request(&self) -> RegisterRequest {
        RegisterRequest {
            nik: self.nik.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            position: self.position.to_string(),
        }
    }

    pub fn to_update_request(&self) -> UpdateRequest {
        UpdateRequest {
            nik: self.nik.clone(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            position: self.position.to_string(),
        }
    }
}

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Blocking message shown until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, title: title.into(), message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, title: "Error".to_string(), message: message.into() }
    }
}

/// Result of a background request, delivered over the state's channel
#[derive(Debug)]
pub enum ApiOutcome {
    LoggedIn(Result<String, String>),
    Me(Result<EmployeeRecord, String>),
    Users(Result<Vec<EmployeeRecord>, String>),
    Saved(FormMode, Result<EmployeeRecord, String>),
    Deleted(Result<String, String>),
}
