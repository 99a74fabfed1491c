//! Application configuration
//!
//! Loaded from an optional `config.toml`. Every field has a default, so an
//! empty or missing file is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::SortKey;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the database; platform data dir when unset
    pub data_dir: Option<PathBuf>,
    pub database_file: String,
    /// Order the dashboard starts in
    pub default_sort: SortKey,
    /// Fallback tracing filter when `RUST_LOG` is not set
    pub log_filter: Option<String>,
    pub min_username_len: usize,
    pub min_password_len: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            database_file: "notes.db".to_string(),
            default_sort: SortKey::Updated,
            log_filter: None,
            min_username_len: 3,
            min_password_len: 6,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read `path`, falling back to defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => toml::from_str(&raw)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Database location given the platform default data directory
    pub fn database_path(&self, default_data_dir: &Path) -> PathBuf {
        self.data_dir
            .as_deref()
            .unwrap_or(default_data_dir)
            .join(&self.database_file)
    }

    pub fn account_policy(&self) -> AccountPolicy {
        AccountPolicy {
            min_username_len: self.min_username_len,
            min_password_len: self.min_password_len,
        }
    }
}

/// Registration length limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountPolicy {
    pub min_username_len: usize,
    pub min_password_len: usize,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        AppConfig::default().account_policy()
    }
}
