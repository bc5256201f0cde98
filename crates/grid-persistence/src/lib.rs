//! Grid state persistence for datamotion-grid
//!
//! Saves and restores the persistable part of a grid (column visibility,
//! column order, saved views and the active view) through a string
//! key/value store.
//!
//! # Architecture
//!
//! - `StateStore` trait abstracts the key/value backend
//! - `GridPersistence` loads/saves a `GridSnapshot` under `GRID_STORAGE_KEY`
//! - `StorageBackend` picks a backend from configuration
//!
//! ## Storage Backends
//!
//! - `FilesystemStore` - One JSON file per key in a directory
//! - `MemoryStore` - In-process map, for tests and dry runs
//!
//! # Example
//!
//! ```rust
//! use grid_persistence::{GridPersistence, MemoryStore};
//! use grid_state::GridState;
//!
//! let persistence = GridPersistence::new(MemoryStore::new());
//!
//! let mut state = GridState::new();
//! state.create_view("Mine", None);
//! persistence.save(&state).unwrap();
//!
//! let mut restored = GridState::new();
//! assert!(persistence.load(&mut restored));
//! assert_eq!(restored.views.len(), 1);
//! ```

mod config;
mod error;
mod filesystem;
mod manager;
pub mod store;


// Re-export config types
pub use config::StorageBackend;

// Re-export error types
pub use error::{PersistenceError, Result};

// Re-export manager types
pub use manager::{GridPersistence, GRID_STORAGE_KEY};

// Re-export store trait and implementations
pub use filesystem::FilesystemStore;
pub use store::{MemoryStore, StateStore};
