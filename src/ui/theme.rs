//! UI Theme - Shared colors and styling constants
//!
//! Centralized color definitions for the editor window.

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Dark background color
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Header/toolbar background
pub const HEADER_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Accent color (cyan like MuseScore)
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

/// Unsaved-changes marker and error messages
pub const WARN_COLOR: Color = Color::new(0.95, 0.6, 0.3, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Header/title text size
pub const FONT_SIZE_HEADER: f32 = 14.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 12.0;

// =============================================================================
// Button Colors
// =============================================================================

/// Button background
pub const BUTTON_BG: Color = Color::new(0.196, 0.196, 0.216, 1.0); // ~50, 50, 55

/// Button hover background
pub const BUTTON_HOVER: Color = Color::new(0.235, 0.235, 0.275, 1.0); // ~60, 60, 70

/// Button border
pub const BUTTON_BORDER: Color = Color::new(0.314, 0.314, 0.314, 1.0); // ~80, 80, 80

// =============================================================================
// Row colors
// =============================================================================

/// Even row background
pub const ROW_EVEN: Color = Color::new(0.13, 0.13, 0.15, 1.0);

/// Odd row background
pub const ROW_ODD: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Field being edited
pub const ROW_HIGHLIGHT: Color = Color::new(0.2, 0.25, 0.3, 1.0);
