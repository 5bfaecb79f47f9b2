use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, StoreError};

/// Project-level configuration, loaded from `.keystash.toml`.
///
/// Every field has a sensible default so keystash works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the working directory) where the master
    /// key and credential files are stored.
    #[serde(default = "default_store_dir")]
    pub store_dir: String,

    /// Minimum accepted credential length during enrollment, in bytes.
    #[serde(default = "default_min_secret_len")]
    pub min_secret_len: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_store_dir() -> String {
    ".keystash".to_string()
}

fn default_min_secret_len() -> usize {
    crate::enroll::DEFAULT_MIN_SECRET_LEN
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            min_secret_len: default_min_secret_len(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".keystash.toml";

    /// Load settings from `<project_dir>/.keystash.toml`.
    ///
    /// If the file does not exist, defaults are returned.  If the file
    /// exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            StoreError::Config(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path of the store directory.
    pub fn store_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.store_dir)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
