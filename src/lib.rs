//! AnimIdManager: animation ID catalog for the game's animator controllers
//!
//! Designers keep the integer parameters the animator switches on (per
//! weapon, per stance) in one JSON file, `AnimIDManager/AnimIdInfo.json`
//! under the project assets. This crate holds the data model, the default
//! tables and the load/save logic; the editor window in `main.rs` and the
//! `xtask` commands are thin hosts around it.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod catalog;
pub mod config;
pub mod defaults;
pub mod session;
pub mod storage;
pub mod store;

pub use catalog::{Category, IdKind, IdentifierCatalog, NamedIdentifier, Role};
pub use config::{ConfigError, ToolConfig};
pub use defaults::build_defaults;
pub use session::{CatalogSession, SessionState};
pub use storage::{LocalStorage, MemoryStorage, StorageBackend, StorageError};
pub use store::{CatalogError, CatalogOrigin, CatalogStore};
