//! Filesystem-based state storage implementation.

use crate::error::{PersistenceError, Result};
use crate::store::StateStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem implementation of the StateStore trait.
///
/// Stores each key as `<dir>/<sanitized key>.json`. Characters outside
/// `[A-Za-z0-9._-]` are replaced with `_`, so `datamotion-grid:gridState:v1`
/// lands in `datamotion-grid_gridState_v1.json`.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    dir: PathBuf,
}

impl FilesystemStore {
    /// Create a new FilesystemStore with the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that backs `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        if name.trim_matches('.').is_empty() {
            return Err(PersistenceError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{name}.json")))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl StateStore for FilesystemStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;
        let path = self.path_for(key)?;
        std::fs::write(&path, value).map_err(|e| io_error(&path, e))?;
        tracing::debug!("Stored {} to {}", key, path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path, e)),
        }
    }
}
