//! Tool configuration
//!
//! Decides where the catalog file lives. Sources, later ones win:
//! built-in defaults, `<config dir>/anim-id-manager/config.ron`,
//! the `ANIM_ID_ASSETS_ROOT` environment variable, an explicit CLI path.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the project assets root
pub const ASSETS_ROOT_ENV: &str = "ANIM_ID_ASSETS_ROOT";

const CONFIG_DIR_NAME: &str = "anim-id-manager";
const CONFIG_FILE_NAME: &str = "config.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Where the catalog file lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Project assets directory
    pub assets_root: PathBuf,
    /// Folder under the assets root holding the catalog
    pub catalog_dir: String,
    /// Catalog file name
    pub file_name: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("assets"),
            catalog_dir: "AnimIDManager".to_string(),
            file_name: "AnimIdInfo.json".to_string(),
        }
    }
}

impl ToolConfig {
    /// Full path of the catalog file
    pub fn catalog_path(&self) -> PathBuf {
        self.assets_root.join(&self.catalog_dir).join(&self.file_name)
    }

    /// Default location of the user config file
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read a RON config file
    ///
    /// A missing file gives the defaults. Fields left out of the file keep
    /// their default values.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Config: no config at {}", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Config: loaded {}", path.display());
        Ok(config)
    }

    /// Apply an assets root override, if any
    pub fn with_assets_root(mut self, assets_root: Option<PathBuf>) -> Self {
        if let Some(root) = assets_root {
            self.assets_root = root;
        }
        self
    }

    /// Resolve the config from every source
    ///
    /// `cli_assets_root` is the assets directory given on the command line.
    pub fn resolve(cli_assets_root: Option<PathBuf>) -> Result<Self, ConfigError> {
        let env_root = std::env::var_os(ASSETS_ROOT_ENV);
        Self::resolve_from(Self::default_config_path().as_deref(), env_root, cli_assets_root)
    }

    /// Layer the config file, an env value and the CLI path, in that order
    fn resolve_from(
        config_path: Option<&Path>,
        env_root: Option<OsString>,
        cli_assets_root: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let base = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let env_root = env_root.filter(|v| !v.is_empty()).map(PathBuf::from);

        let config = base.with_assets_root(env_root).with_assets_root(cli_assets_root);
        log::debug!("Config: catalog path {}", config.catalog_path().display());
        Ok(config)
    }

    /// Serialize to the RON form `from_file` reads
    #[cfg(test)]
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        let pretty = ron::ser::PrettyConfig::new().indentor("  ".to_string());
        ron::ser::to_string_pretty(self, pretty)
    }
}
