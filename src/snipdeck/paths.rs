//! Where the catalog file lives.
//!
//! The program may run from an installed or bundled location that has nothing
//! to do with the working directory, so the catalog is never looked up
//! relative to the cwd. Resolution order:
//!
//! 1. an explicit override path (e.g. `--file`)
//! 2. a catalog shipped next to the running executable, if one exists
//! 3. `<data dir>/<catalog_file>`, where the data dir is the config's
//!    `data_dir` or the per-user data directory

use crate::config::SnipdeckConfig;
use crate::error::{Result, SnipError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    /// Directory containing the running executable.
    pub bundle_dir: Option<PathBuf>,
    /// Per-user data directory.
    pub data_dir: PathBuf,
    /// Per-user config directory (holds `config.json`).
    pub config_dir: PathBuf,
}

impl CatalogPaths {
    pub fn discover() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "snipdeck", "snipdeck").ok_or_else(|| {
            SnipError::Config("Could not determine a home directory".to_string())
        })?;
        let bundle_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Ok(Self {
            bundle_dir,
            data_dir: dirs.data_dir().to_path_buf(),
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    pub fn catalog_path(&self, config: &SnipdeckConfig, override_path: Option<&Path>) -> PathBuf {
        if let Some(path) = override_path {
            return path.to_path_buf();
        }

        if let Some(bundled) = self
            .bundle_dir
            .as_ref()
            .map(|dir| dir.join(&config.catalog_file))
            .filter(|p| p.is_file())
        {
            return bundled;
        }

        config
            .data_dir
            .as_deref()
            .unwrap_or(self.data_dir.as_path())
            .join(&config.catalog_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn paths(bundle: &TempDir, data: &TempDir) -> CatalogPaths {
        CatalogPaths {
            bundle_dir: Some(bundle.path().to_path_buf()),
            data_dir: data.path().to_path_buf(),
            config_dir: data.path().join("config"),
        }
    }

    #[test]
    fn override_wins() {
        let (bundle, data) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        fs::write(bundle.path().join("buttons.json"), "{}").unwrap();

        let resolved = paths(&bundle, &data).catalog_path(
            &SnipdeckConfig::default(),
            Some(Path::new("/elsewhere/deck.json")),
        );
        assert_eq!(resolved, PathBuf::from("/elsewhere/deck.json"));
    }

    #[test]
    fn bundled_catalog_is_used_when_present() {
        let (bundle, data) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        fs::write(bundle.path().join("buttons.json"), "{}").unwrap();

        let resolved = paths(&bundle, &data).catalog_path(&SnipdeckConfig::default(), None);
        assert_eq!(resolved, bundle.path().join("buttons.json"));
    }

    #[test]
    fn falls_back_to_data_dir() {
        let (bundle, data) = (TempDir::new().unwrap(), TempDir::new().unwrap());

        let resolved = paths(&bundle, &data).catalog_path(&SnipdeckConfig::default(), None);
        assert_eq!(resolved, data.path().join("buttons.json"));
    }

    #[test]
    fn config_data_dir_and_file_name_apply() {
        let (bundle, data) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        let config = SnipdeckConfig {
            catalog_file: "deck.json".to_string(),
            data_dir: Some(PathBuf::from("/srv/deck")),
        };

        let resolved = paths(&bundle, &data).catalog_path(&config, None);
        assert_eq!(resolved, PathBuf::from("/srv/deck/deck.json"));
    }
}
