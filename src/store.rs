//! Catalog file I/O
//!
//! Loads and saves the animation ID catalog as JSON (AnimIdInfo.json).
//! A missing file is a normal outcome (`Ok(None)`), not an error; the caller
//! decides whether to fall back to the default tables.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::IdentifierCatalog;
use crate::defaults;
use crate::storage::{StorageBackend, StorageError};

/// Byte order mark some editors prepend to UTF-8 files
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Errors from loading or saving a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File content is not a catalog document
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// File could not be read or written
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: StorageError,
    },
    /// Catalog could not be turned into JSON
    #[error("failed to serialize catalog: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CatalogError {
    pub fn is_parse(&self) -> bool {
        matches!(self, CatalogError::Parse { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, CatalogError::Io { .. })
    }
}

/// Where the in-memory catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Read from an existing file
    File,
    /// Synthesized because no file existed
    Defaults,
}

/// Serialize a catalog to the on-disk text form
pub fn to_json(catalog: &IdentifierCatalog) -> Result<String, CatalogError> {
    let mut text = serde_json::to_string_pretty(catalog).map_err(CatalogError::Encode)?;
    text.push('\n');
    Ok(text)
}

/// Parse a catalog document
///
/// The whole document must match: all five lists present, no extra fields.
pub fn from_json(bytes: &[u8]) -> Result<IdentifierCatalog, serde_json::Error> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    serde_json::from_slice(bytes)
}

/// Reads and writes one catalog file through a storage backend
#[derive(Debug)]
pub struct CatalogStore<S> {
    storage: S,
    path: PathBuf,
}

impl<S: StorageBackend> CatalogStore<S> {
    pub fn new(storage: S, path: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Resolved location of the catalog file, for display
    pub fn location(&self) -> String {
        self.storage.describe(&self.path)
    }

    /// Load the catalog file
    ///
    /// Returns `Ok(None)` if there is no file at the path.
    pub fn load(&self) -> Result<Option<IdentifierCatalog>, CatalogError> {
        if !self.storage.exists(&self.path) {
            log::debug!("Catalog: no file at {}", self.location());
            return Ok(None);
        }

        let bytes = match self.storage.read(&self.path) {
            Ok(bytes) => bytes,
            // Removed between the exists check and the read
            Err(StorageError::NotFound(_)) => return Ok(None),
            Err(source) => {
                return Err(CatalogError::Io {
                    path: self.location(),
                    source,
                })
            }
        };

        let catalog = from_json(&bytes).map_err(|source| CatalogError::Parse {
            path: self.location(),
            source,
        })?;

        log::info!(
            "Catalog: loaded {} ids from {}",
            catalog.len(),
            self.location()
        );
        Ok(Some(catalog))
    }

    /// The catalog used when no file exists
    pub fn build_defaults(&self) -> IdentifierCatalog {
        defaults::build_defaults()
    }

    /// Load the file, or build defaults if it doesn't exist
    pub fn load_or_default(&self) -> Result<(IdentifierCatalog, CatalogOrigin), CatalogError> {
        match self.load()? {
            Some(catalog) => Ok((catalog, CatalogOrigin::File)),
            None => {
                log::info!("Catalog: using default ids");
                Ok((self.build_defaults(), CatalogOrigin::Defaults))
            }
        }
    }

    /// Overwrite the catalog file with `catalog`
    pub fn save(&self, catalog: &IdentifierCatalog) -> Result<(), CatalogError> {
        let text = to_json(catalog)?;
        self.storage
            .write(&self.path, text.as_bytes())
            .map_err(|source| CatalogError::Io {
                path: self.location(),
                source,
            })?;

        log::info!("Catalog: saved {} ids to {}", catalog.len(), self.location());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{NamedIdentifier, Role};
    use crate::storage::{LocalStorage, MemoryStorage};
    use tempfile::TempDir;

    const PATH: &str = "AnimIDManager/AnimIdInfo.json";

    fn memory_store() -> CatalogStore<MemoryStorage> {
        CatalogStore::new(MemoryStorage::new(), PATH)
    }

    fn sample_catalog() -> IdentifierCatalog {
        let mut catalog = IdentifierCatalog::new();
        catalog.set_ids(
            Role::MeleeMovement,
            vec![NamedIdentifier::new("Walk", 7), NamedIdentifier::new("Run", 2)],
        );
        catalog.set_ids(Role::MeleeAttack, vec![NamedIdentifier::new("Slash", 9)]);
        catalog.set_ids(Role::Defence, vec![NamedIdentifier::new("Parry", -1)]);
        // shooter lists stay empty
        catalog
    }

    #[test]
    fn test_load_absent_file() {
        let store = memory_store();
        assert!(store.load().unwrap().is_none());
        // Still absent the second time, nothing was created
        assert!(store.load().unwrap().is_none());
        assert_eq!(store.storage().file_count(), 0);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = memory_store();
        let catalog = sample_catalog();

        store.save(&catalog).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded, catalog);
        assert!(loaded.ids(Role::ShooterMovement).is_empty());
    }

    #[test]
    fn test_round_trip_on_disk() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("AnimIDManager")).unwrap();
        let store = CatalogStore::new(LocalStorage::with_base_dir(dir.path()), PATH);

        store.save(&sample_catalog()).unwrap();
        assert!(dir.path().join(PATH).is_file());
        assert_eq!(store.load().unwrap(), Some(sample_catalog()));
    }

    #[test]
    fn test_save_overwrites_whole_file() {
        let store = memory_store();
        store.save(&defaults::build_defaults()).unwrap();

        let mut smaller = IdentifierCatalog::new();
        smaller.set_ids(Role::Defence, vec![NamedIdentifier::new("Block", 1)]);
        store.save(&smaller).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, smaller);
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_missing_list_is_parse_error() {
        let storage = MemoryStorage::new().with_file(
            PATH,
            r#"{"meleeMovementIds":[],"shooterMovementIds":[],"meleeAttackIds":[],"defenceIds":[]}"#,
        );
        let store = CatalogStore::new(storage, PATH);

        let err = store.load().unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("shooterAttackIds"));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let storage = MemoryStorage::new().with_file(PATH, "not json at all");
        let store = CatalogStore::new(storage, PATH);
        assert!(store.load().unwrap_err().is_parse());
    }

    #[test]
    fn test_wrong_id_type_is_parse_error() {
        let storage = MemoryStorage::new().with_file(
            PATH,
            r#"{"meleeMovementIds":[{"name":"Sword","id":"2"}],"shooterMovementIds":[],"meleeAttackIds":[],"shooterAttackIds":[],"defenceIds":[]}"#,
        );
        let store = CatalogStore::new(storage, PATH);
        assert!(store.load().unwrap_err().is_parse());
    }

    #[test]
    fn test_bom_is_ignored() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(to_json(&sample_catalog()).unwrap().as_bytes());
        let store = CatalogStore::new(MemoryStorage::new().with_file(PATH, bytes), PATH);

        assert_eq!(store.load().unwrap(), Some(sample_catalog()));
    }

    #[test]
    fn test_save_to_read_only_is_io_error() {
        let store = CatalogStore::new(MemoryStorage::new().read_only(), PATH);
        let err = store.save(&sample_catalog()).unwrap_err();
        assert!(err.is_io());
        assert!(matches!(
            err,
            CatalogError::Io {
                source: StorageError::PermissionDenied(_),
                ..
            }
        ));
    }

    #[test]
    fn test_save_into_missing_dir_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(LocalStorage::with_base_dir(dir.path()), "NoSuchDir/AnimIdInfo.json");

        let err = store.save(&defaults::build_defaults()).unwrap_err();
        assert!(err.is_io());
        assert!(matches!(
            err,
            CatalogError::Io {
                source: StorageError::NotFound(_),
                ..
            }
        ));
        assert!(!dir.path().join("NoSuchDir").exists());
    }

    #[test]
    fn test_fresh_project_scenario() {
        let store = memory_store();

        let (catalog, origin) = store.load_or_default().unwrap();
        assert_eq!(origin, CatalogOrigin::Defaults);
        assert_eq!(
            catalog.ids(Role::Defence),
            &[
                NamedIdentifier::new("Unarmed", 0),
                NamedIdentifier::new("Sword", 1),
                NamedIdentifier::new("Shield", 3),
            ]
        );

        store.save(&catalog).unwrap();
        let (reloaded, origin) = store.load_or_default().unwrap();
        assert_eq!(origin, CatalogOrigin::File);
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn test_json_layout() {
        let mut catalog = IdentifierCatalog::new();
        catalog.set_ids(Role::Defence, vec![NamedIdentifier::new("Shield", 3)]);
        let text = to_json(&catalog).unwrap();

        assert!(text.ends_with("}\n"));
        let keys: Vec<usize> = [
            "meleeMovementIds",
            "shooterMovementIds",
            "meleeAttackIds",
            "shooterAttackIds",
            "defenceIds",
        ]
        .iter()
        .map(|k| text.find(k).unwrap())
        .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("\"name\": \"Shield\""));
    }
}
