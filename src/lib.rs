//! datamotion-grid
//!
//! Deterministic mock datasets for data grids, plus the filtering, sorting,
//! saved-view and virtualization logic a grid runs over them.
//!
//! # Crates
//!
//! - `grid_core` - row model types and column definitions
//! - `dataset_generator` - seeded LCG row generator
//! - `grid_query` - filter predicates, comparators and the row model
//! - `grid_state` - grid state reducers, saved views and the store
//! - `grid_persistence` - key/value persistence of layout and views
//! - `dataset_export` - CSV, JSON and JSON Lines output
//!
//! # CLI Usage
//!
//! ```bash
//! # 1000 rows as CSV
//! datamotion-grid generate --rows 1000 --seed 42 --format csv --output rows.csv
//!
//! # Active rows from Spain, highest amount first
//! datamotion-grid query --filter status=Active --filter country=Spain --sort amount:desc
//!
//! # Save and reuse a view
//! datamotion-grid views --state-dir .grid create --name "Big" --filter amount=5000
//! datamotion-grid query --state-dir .grid --view highAmount --limit 5
//!
//! # Rows rendered at a scroll position
//! datamotion-grid window --rows 20000 --scroll 4000 --viewport 600
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod performance;
pub mod virtualization;

pub use config::{ConfigError, GridSettings};
pub use performance::{measure_sync, PerformanceSample};
pub use virtualization::{estimate_total_height, visible_window, VirtualItem};
