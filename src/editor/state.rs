//! Editor window state
//!
//! Wraps the catalog session with what the window needs on top: the
//! selected category, the field being edited and the status line.

use anim_id_manager::{CatalogSession, Category, LocalStorage, Role, SessionState, StorageBackend};
use crate::ui::{InputFilter, TextInputState};

/// How long status messages stay visible (seconds)
const STATUS_DURATION: f64 = 3.0;
const WARNING_DURATION: f64 = 8.0;

/// Editable column of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Id,
}

/// A row field currently being typed into
#[derive(Debug, Clone)]
pub struct FieldEdit {
    pub role: Role,
    pub row: usize,
    pub field: Field,
    pub input: TextInputState,
}

pub struct EditorState<S = LocalStorage> {
    pub session: CatalogSession<S>,
    /// Category shown in the body
    pub category: Category,
    pub editing: Option<FieldEdit>,
    /// Body scroll offset in pixels
    pub scroll: f32,
    /// Status message
    pub status_message: Option<(String, f64)>, // (message, expiry_time)
    /// Current status message is a problem report
    pub status_warning: bool,
}

impl<S: StorageBackend> EditorState<S> {
    pub fn new(session: CatalogSession<S>) -> Self {
        Self {
            session,
            category: Category::default(),
            editing: None,
            scroll: 0.0,
            status_message: None,
            status_warning: false,
        }
    }

    /// Load the catalog (or defaults) and report how it went
    pub fn activate(&mut self, now: f64) {
        self.editing = None;
        match self.session.activate() {
            SessionState::Loaded => {
                let count = self.session.catalog().map_or(0, |c| c.len());
                self.set_status(&format!("Loaded {} ids", count), STATUS_DURATION, now);
            }
            SessionState::Defaulted => {
                match self.session.load_error() {
                    Some(e) => {
                        let message = format!("{} - using defaults", e);
                        self.set_warning(&message, now);
                    }
                    None => self.set_status("No catalog file yet - using defaults", STATUS_DURATION, now),
                }
            }
            SessionState::Uninitialized => {}
        }
    }

    /// Drop the catalog without saving (window closing)
    pub fn deactivate(&mut self) {
        self.editing = None;
        self.session.deactivate();
    }

    /// Set status message
    pub fn set_status(&mut self, message: &str, duration: f64, now: f64) {
        self.status_message = Some((message.to_string(), now + duration));
        self.status_warning = false;
    }

    /// Set a status message flagged as a problem
    pub fn set_warning(&mut self, message: &str, now: f64) {
        self.status_message = Some((message.to_string(), now + WARNING_DURATION));
        self.status_warning = true;
    }

    /// Get current status message if not expired
    pub fn get_status(&self, now: f64) -> Option<&str> {
        match &self.status_message {
            Some((msg, expiry)) if now < *expiry => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Window title, with a marker for unsaved edits
    pub fn title(&self) -> String {
        if self.session.is_dirty() {
            "AnimIdManager *".to_string()
        } else {
            "AnimIdManager".to_string()
        }
    }

    pub fn set_category(&mut self, category: Category, now: f64) {
        if category != self.category {
            self.commit_edit(now);
            self.category = category;
            self.scroll = 0.0;
        }
    }

    pub fn is_editing(&self, role: Role, row: usize, field: Field) -> bool {
        matches!(&self.editing, Some(e) if e.role == role && e.row == row && e.field == field)
    }

    /// Start typing into a field, committing whatever was being edited
    pub fn begin_edit(&mut self, role: Role, row: usize, field: Field, now: f64) {
        self.commit_edit(now);

        let Some(entry) = self.session.ids(role).get(row) else {
            return;
        };
        let mut input = match field {
            Field::Name => TextInputState::new(entry.name.clone()),
            Field::Id => TextInputState::new(entry.id.to_string()).with_filter(InputFilter::Integer),
        };
        input.select_all();

        self.editing = Some(FieldEdit {
            role,
            row,
            field,
            input,
        });
    }

    /// Apply the field being edited to the catalog
    ///
    /// Empty names and unparsable ids are rejected and the old value kept.
    /// Returns true if a value was applied.
    pub fn commit_edit(&mut self, now: f64) -> bool {
        let Some(edit) = self.editing.take() else {
            return false;
        };

        match edit.field {
            Field::Name => {
                let name = edit.input.text.trim();
                if name.is_empty() {
                    self.set_warning("Name can't be empty", now);
                    return false;
                }
                self.session.set_name(edit.role, edit.row, name)
            }
            Field::Id => match edit.input.text.parse::<i32>() {
                Ok(id) => self.session.set_id(edit.role, edit.row, id),
                Err(_) => {
                    let message = format!("'{}' is not a valid id", edit.input.text);
                    self.set_warning(&message, now);
                    false
                }
            },
        }
    }

    /// Discard the field being edited
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Commit and move to the next field: name → id → next row's name
    pub fn next_field(&mut self, now: f64) {
        let Some(edit) = &self.editing else {
            return;
        };
        let (role, row, field) = (edit.role, edit.row, edit.field);

        match field {
            Field::Name => self.begin_edit(role, row, Field::Id, now),
            Field::Id if row + 1 < self.session.ids(role).len() => {
                self.begin_edit(role, row + 1, Field::Name, now)
            }
            Field::Id => {
                self.commit_edit(now);
            }
        }
    }

    /// Write the catalog file
    pub fn save(&mut self, now: f64) {
        self.commit_edit(now);
        match self.session.save() {
            Ok(true) => {
                let message = format!("Saved {}", self.session.store().location());
                self.set_status(&message, STATUS_DURATION, now);
            }
            Ok(false) => self.set_warning("Nothing to save", now),
            Err(e) => {
                log::error!("Editor: {}", e);
                self.set_warning(&format!("Save failed: {}", e), now);
            }
        }
    }

    /// Replace the in-memory catalog with the default tables
    pub fn reset_to_defaults(&mut self, now: f64) {
        self.cancel_edit();
        self.session.reset_to_defaults();
        self.set_status("Defaults restored (not saved)", STATUS_DURATION, now);
    }

    /// Append a row and start editing its name
    pub fn add_row(&mut self, role: Role, now: f64) {
        self.commit_edit(now);
        if let Some(row) = self.session.push_row(role) {
            self.begin_edit(role, row, Field::Name, now);
        }
    }

    pub fn remove_row(&mut self, role: Role, row: usize) {
        // Row indices shift, so an open edit would land on the wrong row
        if matches!(&self.editing, Some(e) if e.role == role) {
            self.cancel_edit();
        }
        self.session.remove_row(role, row);
    }
}
