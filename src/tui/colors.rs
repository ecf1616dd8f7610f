//! Color palette for the TUI
//!
//! Muted, cohesive colors shared by the loading and picker screens.

use ratatui::style::Color;

/// Border chrome.
pub const BORDER: Color = Color::Rgb(100, 110, 130);
/// Background of the highlighted row.
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);

/// Primary text.
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
/// De-emphasized labels.
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
/// Hints and fine print.
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

/// Current-model marker.
pub const ACCENT_POSITIVE: Color = Color::Rgb(120, 180, 120);
/// Loading / attention text.
pub const ACCENT_WARNING: Color = Color::Rgb(200, 160, 80);
/// Empty-result text.
pub const ACCENT_NEGATIVE: Color = Color::Rgb(200, 100, 100);

/// Screen background.
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);
