//! AnimIdManager editor window
//!
//! Category selector on top, editable name/id rows per role, Save writes
//! the catalog file. Closing the window drops unsaved edits.

mod layout;
mod state;

pub use layout::draw_anim_id_editor;
pub use state::EditorState;
