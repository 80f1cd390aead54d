//! Theme Module
//!
//! Color scheme and styling helpers for the admin client.
//!
//! - Color constants for the slate/blue palette
//! - Frame builders for the top bar, page and dialogs
//! - Primary and danger button builders

pub mod colors;
pub mod styles;

pub use styles::*;
