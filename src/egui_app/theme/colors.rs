//! Color Constants for the Admin Theme
//!
//! A light slate palette with a blue accent. Red is reserved for destructive
//! actions and errors.

use eframe::egui::Color32;

/// Top bar background - Dark slate
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Page background - Off-white
pub const PAGE_BG: Color32 = Color32::from_rgb(0xF3, 0xF4, 0xF6);

/// Dialog and card background
pub const SURFACE: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Borders and grid lines
pub const BORDER: Color32 = Color32::from_rgb(0xD1, 0xD5, 0xDB);

/// Alternate table row
pub const ROW_STRIPE: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Primary buttons and highlights
pub const ACCENT: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);

/// Hovered primary button
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x1D, 0x4E, 0xD8);

/// Delete buttons
pub const DANGER: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xB9, 0x1C, 0x1C);
