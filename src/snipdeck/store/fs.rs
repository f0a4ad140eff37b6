use super::{decode_document, encode_document, CatalogStore};
use crate::error::{Result, SnipError};
use crate::model::Snippet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Catalog persisted to a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn write_error(&self, source: std::io::Error) -> SnipError {
        SnipError::StoreWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> Result<Vec<Snippet>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No catalog at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(SnipError::StoreRead {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })
            }
        };

        let snippets = decode_document(&content, &self.path)?;
        log::debug!(
            "Loaded {} snippet(s) from {}",
            snippets.len(),
            self.path.display()
        );
        Ok(snippets)
    }

    fn save(&mut self, snippets: &[Snippet]) -> Result<()> {
        let dir = self.parent_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| self.write_error(e))?;
        }

        let content = encode_document(snippets)?;

        // Temp file lives beside the target so the rename stays on one filesystem.
        let tmp_file = dir.join(format!(".buttons-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(self.write_error(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(self.write_error(e));
        }

        log::debug!(
            "Saved {} snippet(s) to {}",
            snippets.len(),
            self.path.display()
        );
        Ok(())
    }
}
