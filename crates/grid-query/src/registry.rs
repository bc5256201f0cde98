//! Per-column registration of filter predicates and sort comparators.

use crate::{filter, sort, GetValue};
use grid_core::{ColumnId, FilterValue};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Named filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    IncludesString,
    EqualsString,
    InArray,
    NumberGreaterOrEqual,
    DateOnOrAfter,
}

impl FilterKind {
    /// Run the predicate.
    pub fn apply<R: GetValue + ?Sized>(
        &self,
        row: &R,
        column: ColumnId,
        value: &FilterValue,
    ) -> bool {
        match self {
            FilterKind::IncludesString => filter::includes_string(row, column, value),
            FilterKind::EqualsString => filter::equals_string(row, column, value),
            FilterKind::InArray => filter::in_array(row, column, value),
            FilterKind::NumberGreaterOrEqual => filter::number_greater_or_equal(row, column, value),
            FilterKind::DateOnOrAfter => filter::date_on_or_after(row, column, value),
        }
    }
}

/// Named sort comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKind {
    Number,
    String,
    Status,
    Date,
}

impl SortKind {
    /// Run the comparator (ascending).
    pub fn compare<R: GetValue + ?Sized>(
        &self,
        row_a: &R,
        row_b: &R,
        column: ColumnId,
    ) -> Ordering {
        match self {
            SortKind::Number => sort::sort_by_number(row_a, row_b, column),
            SortKind::String => sort::sort_by_string(row_a, row_b, column),
            SortKind::Status => sort::sort_by_status(row_a, row_b, column),
            SortKind::Date => sort::sort_by_date(row_a, row_b, column),
        }
    }
}

/// How one column filters, sorts and takes part in global search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBehavior {
    pub filter: FilterKind,
    pub sort: SortKind,
    pub searchable: bool,
}

/// Column -> behavior table consumed by the row model.
#[derive(Debug, Clone)]
pub struct ColumnRegistry {
    behaviors: HashMap<ColumnId, ColumnBehavior>,
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        let behaviors = ColumnId::ALL
            .into_iter()
            .map(|column| (column, default_behavior(column)))
            .collect();
        Self { behaviors }
    }
}

impl ColumnRegistry {
    /// Behavior of a column.
    pub fn behavior(&self, column: ColumnId) -> ColumnBehavior {
        self.behaviors
            .get(&column)
            .copied()
            .unwrap_or_else(|| default_behavior(column))
    }

    pub fn filter_kind(&self, column: ColumnId) -> FilterKind {
        self.behavior(column).filter
    }

    pub fn sort_kind(&self, column: ColumnId) -> SortKind {
        self.behavior(column).sort
    }

    /// Override the filter predicate of a column.
    pub fn with_filter(mut self, column: ColumnId, filter: FilterKind) -> Self {
        let mut behavior = self.behavior(column);
        behavior.filter = filter;
        self.behaviors.insert(column, behavior);
        self
    }

    /// Override the sort comparator of a column.
    pub fn with_sort(mut self, column: ColumnId, sort: SortKind) -> Self {
        let mut behavior = self.behavior(column);
        behavior.sort = sort;
        self.behaviors.insert(column, behavior);
        self
    }

    /// Include or exclude a column from global search.
    pub fn with_searchable(mut self, column: ColumnId, searchable: bool) -> Self {
        let mut behavior = self.behavior(column);
        behavior.searchable = searchable;
        self.behaviors.insert(column, behavior);
        self
    }

    /// Columns taking part in global search, in default column order.
    pub fn searchable_columns(&self) -> Vec<ColumnId> {
        ColumnId::ALL
            .into_iter()
            .filter(|column| self.behavior(*column).searchable)
            .collect()
    }
}

fn default_behavior(column: ColumnId) -> ColumnBehavior {
    let (filter, sort) = match column {
        ColumnId::Id | ColumnId::Amount => (FilterKind::NumberGreaterOrEqual, SortKind::Number),
        ColumnId::Name | ColumnId::Email => (FilterKind::IncludesString, SortKind::String),
        ColumnId::Status => (FilterKind::EqualsString, SortKind::Status),
        ColumnId::Country => (FilterKind::InArray, SortKind::String),
        ColumnId::CreatedAt => (FilterKind::DateOnOrAfter, SortKind::Date),
    };
    ColumnBehavior {
        filter,
        sort,
        searchable: true,
    }
}
