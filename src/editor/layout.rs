//! Editor window layout and rendering
//!
//! Header (category selector, Save/Defaults), one column of editable rows
//! per role in the selected category, and a status bar.

use macroquad::prelude::*;
use anim_id_manager::{Category, IdKind, Role, StorageBackend};
use crate::ui::{
    draw_label, draw_text_input, segmented, text_button, value_box, Rect, UiContext,
    BG_COLOR, FONT_SIZE_CONTENT, FONT_SIZE_HEADER, HEADER_COLOR, ROW_EVEN, ROW_HIGHLIGHT, ROW_ODD,
    TEXT_COLOR, TEXT_DIM, WARN_COLOR,
};
use super::state::{EditorState, Field};

// Layout constants
const HEADER_HEIGHT: f32 = 40.0;
const STATUS_BAR_HEIGHT: f32 = 22.0;
const COLUMN_HEADER_HEIGHT: f32 = 28.0;
const ROW_HEIGHT: f32 = 26.0;
const ID_WIDTH: f32 = 70.0;
const REMOVE_WIDTH: f32 = 24.0;
const CELL_GAP: f32 = 4.0;
const COLUMN_GAP: f32 = 12.0;

/// What a click in a column asked for; applied after drawing the column
enum ColumnAction {
    Edit(usize, Field),
    Remove(usize),
    Add,
}

/// Draw the whole editor window
pub fn draw_anim_id_editor<S: StorageBackend>(
    ctx: &mut UiContext,
    rect: Rect,
    state: &mut EditorState<S>,
    now: f64,
) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, BG_COLOR);

    handle_shortcuts(state, now);

    let header_rect = rect.slice_top(HEADER_HEIGHT);
    let rest = rect.remaining_after_top(HEADER_HEIGHT);
    let status_rect = rest.slice_bottom(STATUS_BAR_HEIGHT);
    let body_rect = rest.remaining_after_bottom(STATUS_BAR_HEIGHT);

    draw_header(ctx, header_rect, state, now);
    draw_body(ctx, body_rect, state, now);
    draw_status_bar(status_rect, state, now);

    // Clicking empty space finishes the edit
    if ctx.unclaimed_click() && state.editing.is_some() {
        state.commit_edit(now);
    }
}

fn handle_shortcuts<S: StorageBackend>(state: &mut EditorState<S>, now: f64) {
    let ctrl = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl)
        || is_key_down(KeyCode::LeftSuper) || is_key_down(KeyCode::RightSuper);

    if ctrl && is_key_pressed(KeyCode::S) {
        state.save(now);
        return;
    }

    if state.editing.is_some() {
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            state.commit_edit(now);
        } else if is_key_pressed(KeyCode::Tab) {
            state.next_field(now);
        } else if is_key_pressed(KeyCode::Escape) {
            state.cancel_edit();
        }
    }
}

fn draw_header<S: StorageBackend>(ctx: &mut UiContext, rect: Rect, state: &mut EditorState<S>, now: f64) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, HEADER_COLOR);
    let inner = rect.pad(6.0);

    let (label_rect, rest) = inner.split_h_px(150.0);
    draw_label(label_rect, &state.title(), FONT_SIZE_HEADER, TEXT_COLOR);

    let (selector_rect, rest) = rest.split_h_px(270.0);
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    if let Some(i) = segmented(ctx, selector_rect, &labels, state.category.index(), FONT_SIZE_CONTENT) {
        if let Some(category) = Category::from_index(i) {
            state.set_category(category, now);
        }
    }

    // Buttons hug the right edge
    let save_rect = Rect::new(rest.right() - 70.0, rest.y, 70.0, rest.h);
    let defaults_rect = Rect::new(save_rect.x - 86.0, rest.y, 80.0, rest.h);

    if state.session.is_dirty() {
        let marker_rect = Rect::new(rest.x + 12.0, rest.y, defaults_rect.x - rest.x - 12.0, rest.h);
        draw_label(marker_rect, "Unsaved changes", FONT_SIZE_CONTENT, WARN_COLOR);
    }

    if text_button(ctx, defaults_rect, "Defaults", FONT_SIZE_CONTENT) {
        state.reset_to_defaults(now);
    }
    if text_button(ctx, save_rect, "Save", FONT_SIZE_CONTENT) {
        state.save(now);
    }
}

fn column_title(role: Role) -> &'static str {
    match role {
        Role::Defence => "Defence IDs",
        Role::MeleeMovement | Role::ShooterMovement => IdKind::Movement.label(),
        Role::MeleeAttack | Role::ShooterAttack => IdKind::Attack.label(),
    }
}

fn draw_body<S: StorageBackend>(ctx: &mut UiContext, rect: Rect, state: &mut EditorState<S>, now: f64) {
    let roles = state.category.roles();
    let list_height = rect.h - COLUMN_HEADER_HEIGHT - COLUMN_GAP;

    // Scroll all columns together; longest column plus its add button sets the range
    let longest = roles.iter().map(|&r| state.session.ids(r).len()).max().unwrap_or(0);
    let content_height = (longest + 1) as f32 * ROW_HEIGHT;
    let max_scroll = (content_height - list_height).max(0.0);
    if ctx.mouse.inside(&rect) && ctx.mouse.scroll != 0.0 {
        state.scroll -= ctx.mouse.scroll.signum() * ROW_HEIGHT;
    }
    state.scroll = state.scroll.clamp(0.0, max_scroll);

    let columns = rect.pad(COLUMN_GAP * 0.5).columns(roles.len());
    for (&role, column) in roles.iter().zip(columns) {
        draw_column(ctx, column.pad(COLUMN_GAP * 0.5), role, state, now);
    }
}

fn draw_column<S: StorageBackend>(
    ctx: &mut UiContext,
    rect: Rect,
    role: Role,
    state: &mut EditorState<S>,
    now: f64,
) {
    let header = rect.slice_top(COLUMN_HEADER_HEIGHT);
    let list = rect.remaining_after_top(COLUMN_HEADER_HEIGHT);

    draw_label(header, column_title(role), FONT_SIZE_HEADER, TEXT_COLOR);
    let id_header = Rect::new(header.right() - REMOVE_WIDTH - CELL_GAP - ID_WIDTH, header.y, ID_WIDTH, header.h);
    draw_label(id_header, "ID", FONT_SIZE_CONTENT, TEXT_DIM);

    // Snapshot the rows so the state can be borrowed mutably for the edit field
    let rows: Vec<(String, i32)> = state
        .session
        .ids(role)
        .iter()
        .map(|n| (n.name.clone(), n.id))
        .collect();

    let mut action = None;

    for (i, (name, id)) in rows.iter().enumerate() {
        let row_rect = Rect::new(list.x, list.y + i as f32 * ROW_HEIGHT - state.scroll, list.w, ROW_HEIGHT);
        if row_rect.y < list.y || row_rect.bottom() > list.bottom() {
            continue;
        }

        let row_bg = if i % 2 == 0 { ROW_EVEN } else { ROW_ODD };
        draw_rectangle(row_rect.x, row_rect.y, row_rect.w, row_rect.h, row_bg);

        let cells = row_rect.pad(2.0);
        let (name_rect, rest) = cells.split_h_px(cells.w - ID_WIDTH - REMOVE_WIDTH - CELL_GAP * 2.0);
        let (_, rest) = rest.split_h_px(CELL_GAP);
        let (id_rect, rest) = rest.split_h_px(ID_WIDTH);
        let (_, remove_rect) = rest.split_h_px(CELL_GAP);

        let id_text = id.to_string();
        for (field, cell, text) in [(Field::Name, name_rect, name.as_str()), (Field::Id, id_rect, id_text.as_str())] {
            if state.is_editing(role, i, field) {
                if let Some(edit) = state.editing.as_mut() {
                    draw_text_input(cell, &mut edit.input, FONT_SIZE_CONTENT);
                }
                // Keep clicks inside the active field from ending the edit
                ctx.take_click(&cell);
            } else {
                value_box(cell, text, FONT_SIZE_CONTENT, row_bg);
                if ctx.take_click(&cell) {
                    action = Some(ColumnAction::Edit(i, field));
                }
            }
        }

        if state.is_editing(role, i, Field::Name) || state.is_editing(role, i, Field::Id) {
            draw_rectangle_lines(row_rect.x, row_rect.y, row_rect.w, row_rect.h, 1.0, ROW_HIGHLIGHT);
        }

        if text_button(ctx, remove_rect, "x", FONT_SIZE_CONTENT) {
            action = Some(ColumnAction::Remove(i));
        }
    }

    let add_rect = Rect::new(list.x, list.y + rows.len() as f32 * ROW_HEIGHT - state.scroll, 80.0, ROW_HEIGHT)
        .pad(2.0);
    if add_rect.y >= list.y
        && add_rect.bottom() <= list.bottom()
        && text_button(ctx, add_rect, "+ Add", FONT_SIZE_CONTENT)
    {
        action = Some(ColumnAction::Add);
    }

    match action {
        Some(ColumnAction::Edit(row, field)) => state.begin_edit(role, row, field, now),
        Some(ColumnAction::Remove(row)) => state.remove_row(role, row),
        Some(ColumnAction::Add) => state.add_row(role, now),
        None => {}
    }
}

fn draw_status_bar<S: StorageBackend>(rect: Rect, state: &EditorState<S>, now: f64) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, HEADER_COLOR);
    let inner = rect.pad(4.0);

    let location = state.session.store().location();
    let (path_rect, message_rect) = inner.split_h_px(inner.w * 0.5);
    draw_label(path_rect, &location, FONT_SIZE_CONTENT, TEXT_DIM);

    if let Some(message) = state.get_status(now) {
        let color = if state.status_warning { WARN_COLOR } else { TEXT_COLOR };
        draw_label(message_rect, message, FONT_SIZE_CONTENT, color);
    }
}
