//! egui Native Admin Client Module
//!
//! A desktop client for the employee admin API built with egui/eframe.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs      - Module exports and documentation
//! ├── main.rs     - Application entry point (binary)
//! ├── config.rs   - Server URL and token storage
//! ├── api.rs      - Blocking HTTP client functions
//! ├── types.rs    - View states, employee form, notifications
//! ├── state/      - AppState and background request handling
//! ├── views/      - Login page, employee table, dialogs
//! └── theme/      - Colors and styling helpers
//! ```
//!
//! Requests run on background threads and report over an mpsc channel that
//! the UI drains every frame. After each successful add, edit or delete the
//! table is fetched again from the server.

pub mod config;
pub mod api;
pub mod types;
pub mod state;
pub mod views;
pub mod theme;

pub use config::Config;
pub use types::{AppView, EmployeeForm, FormMode, Notification};
pub use state::AppState;
