//! Core types for the datamotion-grid data grid.
//!
//! This crate provides the foundational types shared by every other crate
//! in the workspace:
//!
//! - [`Row`] - One synthetic dataset record
//! - [`Status`] - Closed status enumeration carried by each row
//! - [`ColumnId`] - Compile-time checked column identifiers
//! - [`CellValue`] - Raw value read from a row for a column
//! - [`FilterValue`] - Dynamically shaped value a column filter compares against
//! - [`ColumnDefinition`] - Header label and layout metadata for each column
//!
//! # Architecture
//!
//! ```text
//! grid-core (this crate)
//!    │
//!    ├─── dataset-generator  (produces Rows)
//!    ├─── grid-query         (filters and sorts Rows by ColumnId)
//!    ├─── grid-state         (views, column order, visibility)
//!    ├─── grid-persistence   (stores grid snapshots)
//!    └─── dataset-export     (writes Rows as CSV / JSONL)
//! ```
//!
//! # Example
//!
//! ```rust
//! use grid_core::{CellValue, ColumnId, Row, Status};
//!
//! let row = Row {
//!     id: 1,
//!     name: "Alice Smith".to_string(),
//!     email: "alice.smith1@example.com".to_string(),
//!     status: Status::Active,
//!     created_at: "2020-01-01T00:00:00.000Z".to_string(),
//!     country: "Spain".to_string(),
//!     amount: 100.0,
//! };
//!
//! assert_eq!(row.get_value(ColumnId::Amount), CellValue::Float(100.0));
//! assert_eq!(row.get_value_by_key("unknown"), CellValue::Null);
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{column_definition, ColumnAlign, ColumnDefinition};
pub use types::{ColumnId, CoreError, Row, Status};
pub use values::{CellValue, FilterValue};
