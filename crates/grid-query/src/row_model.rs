//! Filtered and sorted row order.

use crate::filter::includes_string;
use crate::query::QuerySpec;
use crate::registry::ColumnRegistry;
use crate::GetValue;
use grid_core::FilterValue;
use std::cmp::Ordering;
use tracing::debug;

/// Row order produced for one query over a row slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowModel {
    /// Indices into the row slice, in display order
    pub order: Vec<usize>,
    /// Rows before filtering
    pub total_rows: usize,
    /// Column filters plus a non-blank global filter
    pub active_filter_count: usize,
}

impl RowModel {
    /// Filter, search and sort `rows`.
    ///
    /// Column filters are AND-ed, then the global filter must match at least
    /// one searchable column, then rows are stably sorted by each sort entry
    /// in turn. Ties keep slice order.
    pub fn compute<R: GetValue>(rows: &[R], query: &QuerySpec, registry: &ColumnRegistry) -> Self {
        let search = FilterValue::Text(query.global_filter.trim().to_string());
        let searchable = registry.searchable_columns();
        let has_search = !query.global_filter.trim().is_empty();

        let mut order: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                query.column_filters.iter().all(|filter| {
                    registry
                        .filter_kind(filter.id)
                        .apply(*row, filter.id, &filter.value)
                })
            })
            .filter(|(_, row)| {
                !has_search
                    || searchable
                        .iter()
                        .any(|column| includes_string(*row, *column, &search))
            })
            .map(|(index, _)| index)
            .collect();

        if !query.sorting.is_empty() {
            order.sort_by(|&a, &b| {
                for entry in &query.sorting {
                    let ordering = registry
                        .sort_kind(entry.id)
                        .compare(&rows[a], &rows[b], entry.id);
                    let ordering = if entry.desc {
                        ordering.reverse()
                    } else {
                        ordering
                    };
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                }
                Ordering::Equal
            });
        }

        debug!(
            "Row model: {} of {} rows after {} filters, {} sort keys",
            order.len(),
            rows.len(),
            query.active_filter_count(),
            query.sorting.len()
        );

        Self {
            order,
            total_rows: rows.len(),
            active_filter_count: query.active_filter_count(),
        }
    }

    /// Rows remaining after filtering.
    pub fn filtered_rows(&self) -> usize {
        self.order.len()
    }

    /// A window of the ordered indices, clamped to the available rows.
    pub fn page(&self, offset: usize, limit: usize) -> &[usize] {
        let start = offset.min(self.order.len());
        let end = start.saturating_add(limit).min(self.order.len());
        &self.order[start..end]
    }

    /// The ordered rows of `rows`.
    ///
    /// `rows` must be the slice this model was computed over.
    pub fn rows<'a, R>(&'a self, rows: &'a [R]) -> impl Iterator<Item = &'a R> + 'a {
        self.order.iter().filter_map(move |&index| rows.get(index))
    }
}
