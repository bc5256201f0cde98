//! Dataset export for datamotion-grid.
//!
//! Writes generated rows to CSV, JSON or JSON Lines, either to any
//! `io::Write` or to a file with timing and size metrics.
//!
//! # Example
//!
//! ```no_run
//! use dataset_export::{ExportFormat, Exporter};
//!
//! let rows = dataset_generator::generate(1000, 42);
//! let metrics = Exporter::new(ExportFormat::Csv).export("rows.csv", &rows)?;
//! println!("{} rows/sec", metrics.rows_per_second());
//! # Ok::<(), dataset_export::ExportError>(())
//! ```

pub mod args;
mod error;
mod exporter;
mod metrics;

pub use args::ExportArgs;
pub use error::ExportError;
pub use exporter::{ExportFormat, Exporter, DEFAULT_BUFFER_SIZE};
pub use metrics::ExportMetrics;
