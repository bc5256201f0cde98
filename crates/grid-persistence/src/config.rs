//! Storage backend selection.

use crate::filesystem::FilesystemStore;
use crate::store::{MemoryStore, StateStore};
use std::path::PathBuf;

/// Where grid state is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// Nothing survives the process.
    #[default]
    Memory,
    /// JSON files under `dir`.
    Filesystem { dir: PathBuf },
}

impl StorageBackend {
    /// Filesystem storage when a directory is given, memory otherwise.
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(dir) => Self::Filesystem { dir },
            None => Self::Memory,
        }
    }

    pub fn is_durable(&self) -> bool {
        matches!(self, Self::Filesystem { .. })
    }

    pub fn open(&self) -> Box<dyn StateStore> {
        match self {
            Self::Memory => Box::new(MemoryStore::new()),
            Self::Filesystem { dir } => Box::new(FilesystemStore::new(dir.clone())),
        }
    }
}
