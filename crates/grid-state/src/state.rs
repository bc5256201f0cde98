//! Grid state value and its reducers.
//!
//! Every reducer is a plain mutation on [`GridState`]. Resetting visibility
//! or order empties the map/list; the effective defaults are resolved by
//! [`GridState::effective_column_order`] and [`GridState::visible_columns`].

use crate::snapshot::GridSnapshot;
use crate::view::{GridView, ViewPatch};
use chrono::Utc;
use grid_core::ColumnId;
use grid_query::{ColumnFilter, ColumnSort, QuerySpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Explicit visibility per column; absent columns are visible.
pub type ColumnVisibility = BTreeMap<ColumnId, bool>;

/// Explicit column order; empty means the default order.
pub type ColumnOrder = Vec<ColumnId>;

/// Selected row keys.
pub type RowSelection = BTreeMap<String, bool>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridState {
    pub sorting: Vec<ColumnSort>,
    pub column_filters: Vec<ColumnFilter>,
    pub global_filter: String,
    pub column_visibility: ColumnVisibility,
    pub column_order: ColumnOrder,
    pub row_selection: RowSelection,
    pub views: Vec<GridView>,
    pub active_view_id: Option<String>,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    // Sorting and filtering

    pub fn set_sorting(&mut self, sorting: Vec<ColumnSort>) {
        self.sorting = sorting;
    }

    pub fn update_sorting(&mut self, f: impl FnOnce(&[ColumnSort]) -> Vec<ColumnSort>) {
        self.sorting = f(&self.sorting);
    }

    pub fn reset_sorting(&mut self) {
        self.sorting.clear();
    }

    pub fn set_column_filters(&mut self, filters: Vec<ColumnFilter>) {
        self.column_filters = filters;
    }

    pub fn update_column_filters(
        &mut self,
        f: impl FnOnce(&[ColumnFilter]) -> Vec<ColumnFilter>,
    ) {
        self.column_filters = f(&self.column_filters);
    }

    pub fn set_global_filter(&mut self, filter: impl Into<String>) {
        self.global_filter = filter.into();
    }

    pub fn update_global_filter(&mut self, f: impl FnOnce(&str) -> String) {
        self.global_filter = f(&self.global_filter);
    }

    /// Clear column filters and the global filter. Sorting is kept.
    pub fn reset_filters(&mut self) {
        self.column_filters.clear();
        self.global_filter.clear();
    }

    // Column visibility

    pub fn set_column_visibility(&mut self, visibility: ColumnVisibility) {
        self.column_visibility = visibility;
    }

    /// Flip one column. A column with no entry counts as visible, so the
    /// first toggle hides it.
    pub fn toggle_column_visibility(&mut self, column: ColumnId) {
        let visible = self.is_column_visible(column);
        self.column_visibility.insert(column, !visible);
    }

    pub fn reset_column_visibility(&mut self) {
        self.column_visibility.clear();
    }

    pub fn is_column_visible(&self, column: ColumnId) -> bool {
        self.column_visibility.get(&column).copied().unwrap_or(true)
    }

    // Column order

    pub fn set_column_order(&mut self, order: ColumnOrder) {
        self.column_order = order;
    }

    /// Move `column` to `target`, clamped to the last position.
    ///
    /// Does nothing when the explicit order is empty or does not contain
    /// the column.
    pub fn move_column(&mut self, column: ColumnId, target: usize) {
        let Some(from) = self.column_order.iter().position(|c| *c == column) else {
            return;
        };
        let target = target.min(self.column_order.len() - 1);
        if from == target {
            return;
        }
        self.column_order.remove(from);
        self.column_order.insert(target, column);
    }

    pub fn reset_column_order(&mut self) {
        self.column_order.clear();
    }

    /// Explicit order with any missing columns appended in default order.
    /// An empty explicit order resolves to the default order.
    pub fn effective_column_order(&self) -> Vec<ColumnId> {
        let mut order: Vec<ColumnId> = Vec::with_capacity(ColumnId::ALL.len());
        for column in self.column_order.iter().chain(ColumnId::ALL.iter()) {
            if !order.contains(column) {
                order.push(*column);
            }
        }
        order
    }

    /// Effective order restricted to visible columns.
    pub fn visible_columns(&self) -> Vec<ColumnId> {
        self.effective_column_order()
            .into_iter()
            .filter(|column| self.is_column_visible(*column))
            .collect()
    }

    // Row selection

    pub fn set_row_selection(&mut self, selection: RowSelection) {
        self.row_selection = selection;
    }

    pub fn update_row_selection(&mut self, f: impl FnOnce(&RowSelection) -> RowSelection) {
        self.row_selection = f(&self.row_selection);
    }

    pub fn clear_row_selection(&mut self) {
        self.row_selection.clear();
    }

    /// Select exactly one row, or none.
    pub fn select_single_row(&mut self, row_id: Option<&str>) {
        self.row_selection.clear();
        if let Some(row_id) = row_id.filter(|id| !id.is_empty()) {
            self.row_selection.insert(row_id.to_string(), true);
        }
    }

    pub fn toggle_row_selection(&mut self, row_id: &str) {
        if self.is_row_selected(row_id) {
            self.row_selection.remove(row_id);
        } else {
            self.row_selection.insert(row_id.to_string(), true);
        }
    }

    pub fn is_row_selected(&self, row_id: &str) -> bool {
        self.row_selection.get(row_id).copied().unwrap_or(false)
    }

    // Views

    pub fn set_views(&mut self, views: Vec<GridView>) {
        self.views = views;
    }

    pub fn view(&self, id: &str) -> Option<&GridView> {
        self.views.iter().find(|view| view.id == id)
    }

    /// Save the current sort, filters, visibility and order as a new view
    /// and make it active. Returns the new view id.
    pub fn create_view(&mut self, name: impl Into<String>, description: Option<String>) -> String {
        let id = new_view_id();
        let view = GridView {
            id: id.clone(),
            name: name.into(),
            description,
            sorting: self.sorting.clone(),
            column_filters: self.column_filters.clone(),
            global_filter: self.global_filter.clone(),
            column_visibility: self.column_visibility.clone(),
            column_order: self.column_order.clone(),
        };
        debug!("Created view {} ({})", view.id, view.name);
        self.views.push(view);
        self.active_view_id = Some(id.clone());
        id
    }

    /// Patch the view with `id`. Unknown ids are ignored.
    pub fn update_view(&mut self, id: &str, patch: ViewPatch) {
        if let Some(view) = self.views.iter_mut().find(|view| view.id == id) {
            patch.apply_to(view);
        }
    }

    pub fn delete_view(&mut self, id: &str) {
        self.views.retain(|view| view.id != id);
        if self.active_view_id.as_deref() == Some(id) {
            self.active_view_id = None;
        }
    }

    /// Load a view's state and clear the row selection.
    ///
    /// Returns `false` and leaves the state untouched when no view has `id`.
    pub fn apply_view(&mut self, id: &str) -> bool {
        let Some(view) = self.view(id).cloned() else {
            debug!("Ignoring unknown view {}", id);
            return false;
        };
        self.sorting = view.sorting;
        self.column_filters = view.column_filters;
        self.global_filter = view.global_filter;
        self.column_visibility = view.column_visibility;
        self.column_order = view.column_order;
        self.active_view_id = Some(view.id);
        self.row_selection.clear();
        true
    }

    // Persistence

    /// Overwrite the fields present in `snapshot`.
    pub fn hydrate(&mut self, snapshot: GridSnapshot) {
        if let Some(visibility) = snapshot.column_visibility {
            self.column_visibility = visibility;
        }
        if let Some(order) = snapshot.column_order {
            self.column_order = order;
        }
        if let Some(views) = snapshot.views {
            self.views = views;
        }
        if let Some(active_view_id) = snapshot.active_view_id {
            self.active_view_id = active_view_id;
        }
    }

    pub fn export_snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            column_visibility: Some(self.column_visibility.clone()),
            column_order: Some(self.column_order.clone()),
            views: Some(self.views.clone()),
            active_view_id: Some(self.active_view_id.clone()),
        }
    }

    /// The sort/filter part of the state, for the row model.
    pub fn query_spec(&self) -> QuerySpec {
        QuerySpec {
            sorting: self.sorting.clone(),
            column_filters: self.column_filters.clone(),
            global_filter: self.global_filter.clone(),
        }
    }
}

fn new_view_id() -> String {
    let entropy = uuid::Uuid::new_v4().simple().to_string();
    format!("view_{}_{}", Utc::now().timestamp_millis(), &entropy[..6])
}
