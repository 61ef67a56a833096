//! Local filesystem storage backend
//!
//! Provides storage operations on the local filesystem.
//! All operations complete immediately (synchronous).

use super::{StorageBackend, StorageError};
use std::path::{Path, PathBuf};

/// Local filesystem storage backend
///
/// Relative paths are resolved against `base_dir`; absolute paths are used
/// as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    /// Base directory for relative paths (usually current working directory)
    base_dir: PathBuf,
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorage {
    /// Create a new local storage backend rooted at the current directory
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
        }
    }

    /// Create a local storage backend with a custom base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a path relative to the base directory
    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }
}

impl StorageBackend for LocalStorage {
    fn read(&self, path: &Path) -> Result<Vec<u8>, StorageError> {
        let full_path = self.resolve(path);
        log::debug!("Storage: reading {}", full_path.display());
        Ok(std::fs::read(&full_path)?)
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<(), StorageError> {
        let full_path = self.resolve(path);
        log::debug!("Storage: writing {} bytes to {}", data.len(), full_path.display());
        std::fs::write(&full_path, data)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn describe(&self, path: &Path) -> String {
        self.resolve(path).display().to_string()
    }
}
