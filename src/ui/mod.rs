//! Immediate-mode UI helpers for the editor window
//!
//! Design principles:
//! - Immediate mode (no retained state, rebuilt each frame)
//! - Simple rectangle-based layout
//! - Macroquad integration for rendering

mod rect;
mod widgets;
mod input;
mod theme;
mod text_input;

pub use rect::*;
pub use widgets::*;
pub use input::*;
pub use theme::*;
pub use text_input::*;
