//! Basic UI widgets

use macroquad::prelude::*;
use super::{
    Rect, UiContext, ACCENT_COLOR, BUTTON_BG, BUTTON_BORDER, BUTTON_HOVER, TEXT_COLOR, TEXT_DIM,
};

/// Draw text vertically centered in `rect`, starting at its left edge
pub fn draw_label(rect: Rect, text: &str, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    // Round to integer pixels for crisp rendering
    let text_y = (rect.y + (rect.h + dims.height) * 0.5).round();
    draw_text(text, rect.x.round(), text_y, font_size, color);
}

/// Draw text centered in `rect`
pub fn draw_label_centered(rect: Rect, text: &str, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let text_x = (rect.x + (rect.w - dims.width) * 0.5).round();
    let text_y = (rect.y + (rect.h + dims.height) * 0.5).round();
    draw_text(text, text_x, text_y, font_size, color);
}

/// Draw a text button, returns true if clicked
pub fn text_button(ctx: &mut UiContext, rect: Rect, label: &str, font_size: f32) -> bool {
    let hovered = ctx.mouse.inside(&rect);
    let bg = if hovered { BUTTON_HOVER } else { BUTTON_BG };

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BUTTON_BORDER);
    draw_label_centered(rect, label, font_size, TEXT_COLOR);

    ctx.take_click(&rect)
}

/// Draw a row of mutually exclusive options (segmented control)
///
/// Returns the index of the option clicked this frame, if any.
pub fn segmented(
    ctx: &mut UiContext,
    rect: Rect,
    options: &[&str],
    selected: usize,
    font_size: f32,
) -> Option<usize> {
    let mut clicked = None;

    for (i, segment) in rect.columns(options.len()).into_iter().enumerate() {
        let is_selected = i == selected;
        let hovered = ctx.mouse.inside(&segment);
        let bg = if is_selected {
            ACCENT_COLOR
        } else if hovered {
            BUTTON_HOVER
        } else {
            BUTTON_BG
        };

        draw_rectangle(segment.x, segment.y, segment.w, segment.h, bg);
        draw_rectangle_lines(segment.x, segment.y, segment.w, segment.h, 1.0, BUTTON_BORDER);
        let color = if is_selected { WHITE } else { TEXT_COLOR };
        draw_label_centered(segment, options[i], font_size, color);

        if ctx.take_click(&segment) {
            clicked = Some(i);
        }
    }

    clicked
}

/// Draw a read-only field box with its value
pub fn value_box(rect: Rect, text: &str, font_size: f32, bg: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BUTTON_BORDER);
    let color = if text.is_empty() { TEXT_DIM } else { TEXT_COLOR };
    draw_label(rect.pad(4.0), text, font_size, color);
}
