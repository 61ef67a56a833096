//! In-memory storage backend

use super::{StorageBackend, StorageError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Files held in a map instead of on disk
///
/// Single-threaded, like the rest of the tool. A read-only instance rejects
/// every write with `PermissionDenied`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file before handing the storage out
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.borrow_mut().insert(path.into(), contents.into());
        self
    }

    /// Make all further writes fail
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Current contents of a file as text, if present
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .borrow()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, path: &Path) -> Result<Vec<u8>, StorageError> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.display().to_string()))
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::PermissionDenied(path.display().to_string()));
        }
        self.files.borrow_mut().insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn describe(&self, path: &Path) -> String {
        format!("memory:{}", path.display())
    }
}
