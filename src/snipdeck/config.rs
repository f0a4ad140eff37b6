use crate::error::{Result, SnipError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_CATALOG_FILE: &str = "buttons.json";

/// Configuration for snipdeck, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnipdeckConfig {
    /// File name of the catalog document
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,

    /// Directory holding the catalog, overriding the per-user data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_catalog_file() -> String {
    DEFAULT_CATALOG_FILE.to_string()
}

impl Default for SnipdeckConfig {
    fn default() -> Self {
        Self {
            catalog_file: default_catalog_file(),
            data_dir: None,
        }
    }
}

impl SnipdeckConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SnipdeckConfig = serde_json::from_str(&content)
            .map_err(|e| SnipError::Config(format!("{}: {}", config_path.display(), e)))?;
        if config.catalog_file.is_empty() {
            return Err(SnipError::Config(
                "catalog_file cannot be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Like [`SnipdeckConfig::load`], falling back to defaults on any error.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        Self::load(config_dir).unwrap_or_else(|e| {
            log::warn!("Ignoring config: {}", e);
            Self::default()
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}
