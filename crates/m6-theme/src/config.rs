//! YAML configuration for a theme setup.
//!
//! ```yaml
//! storage_key: editor-theme
//! storage_path: /home/me/.config/m6-theme/preferences.json
//! ```
//!
//! Every field is optional. The key is validated while loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ThemeError;
use crate::key::StorageKey;

/// Directory name used under the user config dir.
pub const CONFIG_DIR_NAME: &str = "m6-theme";

/// File name of the default file store.
pub const STORE_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: StorageKey,
    pub storage_path: Option<PathBuf>,
}

impl ThemeConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ThemeError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ThemeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// The configured store path, or the per-user default.
    pub fn resolved_storage_path(&self) -> Option<PathBuf> {
        self.storage_path.clone().or_else(default_storage_path)
    }
}

/// `<config root>/m6-theme/preferences.json`, see [`config_root_dir`].
pub fn default_storage_path() -> Option<PathBuf> {
    config_root_dir().map(|root| root.join(CONFIG_DIR_NAME).join(STORE_FILE_NAME))
}

/// `$XDG_CONFIG_HOME` when set, else `~/.config`, else the platform config
/// dir. The home lookup falls back to the user database when `HOME` is unset.
pub fn config_root_dir() -> Option<PathBuf> {
    config_root_from(std::env::var("XDG_CONFIG_HOME").ok().as_deref())
}

fn config_root_from(xdg_config_home: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = xdg_config_home {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
