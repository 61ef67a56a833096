//! Storage Abstraction Layer
//!
//! Provides a small file interface the catalog store reads and writes through:
//! - `LocalStorage` → local filesystem, paths resolved against a base directory
//! - `MemoryStorage` → in-memory files, used by tests and headless previews
//!
//! All operations are synchronous and complete before returning.

pub mod local;
pub mod memory;

pub use local::LocalStorage;
pub use memory::MemoryStorage;

use std::path::Path;
use thiserror::Error;

/// Storage error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// File or directory not found
    #[error("not found: {0}")]
    NotFound(String),
    /// Permission denied
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    /// Any other I/O failure
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(e.to_string()),
            std::io::ErrorKind::PermissionDenied => StorageError::PermissionDenied(e.to_string()),
            _ => StorageError::IoError(e.to_string()),
        }
    }
}

/// File operations the catalog store needs
///
/// Writes replace the whole file. Backends must not leave a mix of old and
/// new content visible after a successful write.
pub trait StorageBackend {
    /// Read a whole file
    fn read(&self, path: &Path) -> Result<Vec<u8>, StorageError>;

    /// Create or overwrite a file. The parent directory must already exist.
    fn write(&self, path: &Path, data: &[u8]) -> Result<(), StorageError>;

    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Human-readable location of `path` for logs and status messages
    fn describe(&self, path: &Path) -> String {
        path.display().to_string()
    }
}
