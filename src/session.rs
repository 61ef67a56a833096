//! Editing session for one catalog
//!
//! Owns the single in-memory catalog while the tool window is open.
//! Activation loads the file (or falls back to defaults), row edits mutate
//! the catalog in place, and nothing reaches disk until `save`.

use crate::catalog::{IdentifierCatalog, NamedIdentifier, Role};
use crate::store::{CatalogError, CatalogOrigin, CatalogStore};
use crate::storage::StorageBackend;

/// Name given to rows added from the editor
pub const NEW_ROW_NAME: &str = "New";

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No catalog in memory
    Uninitialized,
    /// Catalog came from the file
    Loaded,
    /// Catalog was synthesized from the default tables
    Defaulted,
}

/// The tool window's catalog and its lifecycle
#[derive(Debug)]
pub struct CatalogSession<S> {
    store: CatalogStore<S>,
    catalog: Option<IdentifierCatalog>,
    state: SessionState,
    dirty: bool,
    /// Why the last activation fell back to defaults despite a file existing
    load_error: Option<String>,
}

impl<S: StorageBackend> CatalogSession<S> {
    pub fn new(store: CatalogStore<S>) -> Self {
        Self {
            store,
            catalog: None,
            state: SessionState::Uninitialized,
            dirty: false,
            load_error: None,
        }
    }

    pub fn store(&self) -> &CatalogStore<S> {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != SessionState::Uninitialized
    }

    /// Edited since activation or the last successful save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn catalog(&self) -> Option<&IdentifierCatalog> {
        self.catalog.as_ref()
    }

    /// Load the catalog file, or the defaults if it's missing or unreadable
    ///
    /// Replaces any in-memory catalog, discarding unsaved edits.
    pub fn activate(&mut self) -> SessionState {
        self.load_error = None;

        let (catalog, origin) = match self.store.load_or_default() {
            Ok(result) => result,
            Err(e) => {
                log::warn!("Session: {}, falling back to defaults", e);
                self.load_error = Some(e.to_string());
                (self.store.build_defaults(), CatalogOrigin::Defaults)
            }
        };

        self.catalog = Some(catalog);
        self.dirty = false;
        self.state = match origin {
            CatalogOrigin::File => SessionState::Loaded,
            CatalogOrigin::Defaults => SessionState::Defaulted,
        };
        log::info!("Session: activated ({:?})", self.state);
        self.state
    }

    /// Drop the in-memory catalog without saving
    pub fn deactivate(&mut self) {
        if self.dirty {
            log::info!("Session: discarding unsaved edits");
        }
        self.catalog = None;
        self.dirty = false;
        self.load_error = None;
        self.state = SessionState::Uninitialized;
    }

    /// Write the in-memory catalog to the file
    ///
    /// Returns false without touching the file when the session holds no
    /// catalog. A failed save leaves the catalog and dirty flag as they were.
    pub fn save(&mut self) -> Result<bool, CatalogError> {
        let Some(catalog) = &self.catalog else {
            log::warn!("Session: nothing to save, no catalog loaded");
            return Ok(false);
        };
        self.store.save(catalog)?;
        self.dirty = false;
        Ok(true)
    }

    /// Replace the in-memory catalog with the default tables (not saved)
    pub fn reset_to_defaults(&mut self) {
        if self.catalog.is_none() {
            return;
        }
        self.catalog = Some(self.store.build_defaults());
        self.dirty = true;
    }

    /// Identifiers for a role, empty when inactive
    pub fn ids(&self, role: Role) -> &[NamedIdentifier] {
        self.catalog.as_ref().map(|c| c.ids(role)).unwrap_or(&[])
    }

    fn row_mut(&mut self, role: Role, index: usize) -> Option<&mut NamedIdentifier> {
        self.catalog.as_mut()?.ids_mut(role).get_mut(index)
    }

    /// Rename a row. Returns false if the row doesn't exist.
    pub fn set_name(&mut self, role: Role, index: usize, name: &str) -> bool {
        let Some(row) = self.row_mut(role, index) else {
            return false;
        };
        if row.name != name {
            row.name = name.to_string();
            self.dirty = true;
        }
        true
    }

    /// Change a row's id. Returns false if the row doesn't exist.
    pub fn set_id(&mut self, role: Role, index: usize, id: i32) -> bool {
        let Some(row) = self.row_mut(role, index) else {
            return false;
        };
        if row.id != id {
            row.id = id;
            self.dirty = true;
        }
        true
    }

    /// Append a row with the next free id after the largest one in the role
    ///
    /// Returns the new row's index, or None when inactive.
    pub fn push_row(&mut self, role: Role) -> Option<usize> {
        let ids = self.catalog.as_mut()?.ids_mut(role);
        let next_id = ids
            .iter()
            .map(|n| n.id)
            .max()
            .map_or(0, |max| max.saturating_add(1));
        ids.push(NamedIdentifier::new(NEW_ROW_NAME, next_id));
        self.dirty = true;
        Some(ids.len() - 1)
    }

    /// Remove a row. Returns false if the row doesn't exist.
    pub fn remove_row(&mut self, role: Role, index: usize) -> bool {
        let Some(catalog) = self.catalog.as_mut() else {
            return false;
        };
        let ids = catalog.ids_mut(role);
        if index >= ids.len() {
            return false;
        }
        ids.remove(index);
        self.dirty = true;
        true
    }

    /// Move a row to a new position in the same role
    pub fn move_row(&mut self, role: Role, from: usize, to: usize) -> bool {
        let Some(catalog) = self.catalog.as_mut() else {
            return false;
        };
        let ids = catalog.ids_mut(role);
        if from >= ids.len() || to >= ids.len() {
            return false;
        }
        if from != to {
            let row = ids.remove(from);
            ids.insert(to, row);
            self.dirty = true;
        }
        true
    }
}
