//! Loading and saving grid snapshots.

use crate::error::{PersistenceError, Result};
use crate::store::StateStore;
use grid_state::{GridSnapshot, GridState};
use tracing::{debug, info, warn};

/// Key the grid snapshot is stored under.
pub const GRID_STORAGE_KEY: &str = "datamotion-grid:gridState:v1";

/// Reads and writes the persistable part of a [`GridState`].
///
/// Loading never fails the caller: a missing entry is a no-op and a
/// payload that is not a snapshot object is logged and ignored.
///
/// # Example
///
/// ```rust,no_run
/// use grid_persistence::{FilesystemStore, GridPersistence};
/// use grid_state::GridState;
///
/// let persistence = GridPersistence::new(FilesystemStore::new(".datamotion-grid"));
/// let mut state = GridState::new();
/// persistence.load(&mut state);
/// state.toggle_column_visibility(grid_core::ColumnId::Email);
/// persistence.save(&state)?;
/// # Ok::<(), grid_persistence::PersistenceError>(())
/// ```
#[derive(Debug)]
pub struct GridPersistence<S> {
    store: S,
    key: String,
}

impl<S: StateStore> GridPersistence<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, GRID_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored snapshot, if any.
    ///
    /// Storage and parse failures are logged as warnings and reported as
    /// `None`.
    pub fn read_snapshot(&self) -> Option<GridSnapshot> {
        let raw = match self.store.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored grid state under {}", self.key);
                return None;
            }
            Err(e) => {
                warn!("Failed to read grid state from storage: {e}");
                return None;
            }
        };

        match GridSnapshot::from_json(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Failed to hydrate grid state from storage: {e}");
                None
            }
        }
    }

    /// Hydrate `state` from storage. Returns whether a snapshot was applied.
    pub fn load(&self, state: &mut GridState) -> bool {
        match self.read_snapshot() {
            Some(snapshot) => {
                state.hydrate(snapshot);
                info!(
                    "Loaded grid state: {} views, active view {:?}",
                    state.views.len(),
                    state.active_view_id
                );
                true
            }
            None => false,
        }
    }

    /// Write the exported snapshot of `state`.
    ///
    /// Failures are logged as warnings and returned.
    pub fn save(&self, state: &GridState) -> Result<()> {
        let result = state
            .export_snapshot()
            .to_json()
            .map_err(PersistenceError::from)
            .and_then(|json| self.store.write(&self.key, &json));
        match &result {
            Ok(()) => debug!("Saved grid state under {}", self.key),
            Err(e) => warn!("Failed to persist grid state to storage: {e}"),
        }
        result
    }

    /// Drop the stored snapshot.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(&self.key)
    }
}
