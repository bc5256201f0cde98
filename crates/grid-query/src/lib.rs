//! Row predicate library and row model for datamotion-grid.
//!
//! Filter predicates and sort comparators are pure functions over a single
//! accessor, [`GetValue`]. None of them fail: a missing value, an
//! unparseable number or date, or an empty filter resolves to a documented
//! default (permissive for filters, last for sorts) so one malformed cell
//! never aborts a full recompute.
//!
//! # Architecture
//!
//! ```text
//! QuerySpec { sorting, column_filters, global_filter }
//!        │
//!        ▼
//! ┌─────────────────────┐      ColumnRegistry
//! │      RowModel       │◄──── ColumnId -> FilterKind, SortKind
//! │                     │
//! │ filter (AND)        │──── filter::{includes_string, equals_string,
//! │ global search       │              in_array, number_greater_or_equal,
//! │ stable multi-sort   │              date_on_or_after}
//! └─────────┬───────────┘──── sort::{sort_by_number, sort_by_string,
//!           │                        sort_by_status, sort_by_date}
//!           ▼
//!   Vec<usize> (row order)
//! ```
//!
//! # Example
//!
//! ```rust
//! use dataset_generator::generate;
//! use grid_core::ColumnId;
//! use grid_query::{ColumnRegistry, ColumnSort, QuerySpec, RowModel};
//!
//! let rows = generate(100, 42);
//! let query = QuerySpec {
//!     sorting: vec![ColumnSort::desc(ColumnId::Amount)],
//!     ..QuerySpec::default()
//! };
//!
//! let model = RowModel::compute(&rows, &query, &ColumnRegistry::default());
//! let top = &rows[model.order[0]];
//! assert!(rows.iter().all(|row| row.amount <= top.amount));
//! ```

pub mod filter;
pub mod query;
pub mod registry;
pub mod row_model;
pub mod sort;
pub mod value;

use grid_core::{CellValue, ColumnId, Row};

// Re-exports for convenience
pub use query::{ColumnFilter, ColumnSort, QueryError, QuerySpec};
pub use registry::{ColumnBehavior, ColumnRegistry, FilterKind, SortKind};
pub use row_model::RowModel;

/// Accessor the predicates read cells through.
pub trait GetValue {
    /// Raw value of `column` for this row.
    fn get_value(&self, column: ColumnId) -> CellValue;
}

impl GetValue for Row {
    fn get_value(&self, column: ColumnId) -> CellValue {
        Row::get_value(self, column)
    }
}

impl<T: GetValue + ?Sized> GetValue for &T {
    fn get_value(&self, column: ColumnId) -> CellValue {
        (**self).get_value(column)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::GetValue;
    use grid_core::{CellValue, ColumnId};
    use std::collections::HashMap;

    /// Row whose cells are arbitrary values, including ones a generated
    /// row can never hold (`"Archived"` statuses, text amounts).
    #[derive(Debug, Clone, Default)]
    pub struct LooseRow(pub HashMap<ColumnId, CellValue>);

    impl LooseRow {
        pub fn with(mut self, column: ColumnId, value: impl Into<CellValue>) -> Self {
            self.0.insert(column, value.into());
            self
        }

        pub fn null(mut self, column: ColumnId) -> Self {
            self.0.insert(column, CellValue::Null);
            self
        }
    }

    impl GetValue for LooseRow {
        fn get_value(&self, column: ColumnId) -> CellValue {
            self.0.get(&column).cloned().unwrap_or(CellValue::Null)
        }
    }
}
