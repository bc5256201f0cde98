//! Saved views and the predefined view catalog.

use crate::state::{ColumnOrder, ColumnVisibility};
use grid_core::ColumnId;
use grid_query::{ColumnFilter, ColumnSort, QuerySpec};
use serde::{Deserialize, Serialize};

/// Id of the view that shows everything.
pub const DEFAULT_VIEW_ID: &str = "default";

/// A named snapshot of sort, filter, visibility and order state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub sorting: Vec<ColumnSort>,
    #[serde(default)]
    pub column_filters: Vec<ColumnFilter>,
    #[serde(default)]
    pub global_filter: String,
    #[serde(default)]
    pub column_visibility: ColumnVisibility,
    #[serde(default)]
    pub column_order: ColumnOrder,
}

impl GridView {
    /// An empty view: no sort, no filters, default columns.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            sorting: Vec::new(),
            column_filters: Vec::new(),
            global_filter: String::new(),
            column_visibility: ColumnVisibility::new(),
            column_order: ColumnOrder::new(),
        }
    }

    /// The sort/filter part of this view.
    pub fn query_spec(&self) -> QuerySpec {
        QuerySpec {
            sorting: self.sorting.clone(),
            column_filters: self.column_filters.clone(),
            global_filter: self.global_filter.clone(),
        }
    }

    fn described(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    fn all_columns(mut self) -> Self {
        self.column_visibility = ColumnId::ALL.into_iter().map(|c| (c, true)).collect();
        self.column_order = ColumnId::ALL.to_vec();
        self
    }
}

/// Partial update of a view; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sorting: Option<Vec<ColumnSort>>,
    pub column_filters: Option<Vec<ColumnFilter>>,
    pub global_filter: Option<String>,
    pub column_visibility: Option<ColumnVisibility>,
    pub column_order: Option<ColumnOrder>,
}

impl ViewPatch {
    /// Apply the present fields to `view`.
    pub fn apply_to(self, view: &mut GridView) {
        if let Some(name) = self.name {
            view.name = name;
        }
        if let Some(description) = self.description {
            view.description = Some(description);
        }
        if let Some(sorting) = self.sorting {
            view.sorting = sorting;
        }
        if let Some(column_filters) = self.column_filters {
            view.column_filters = column_filters;
        }
        if let Some(global_filter) = self.global_filter {
            view.global_filter = global_filter;
        }
        if let Some(column_visibility) = self.column_visibility {
            view.column_visibility = column_visibility;
        }
        if let Some(column_order) = self.column_order {
            view.column_order = column_order;
        }
    }
}

/// Views every grid starts with.
pub fn predefined_views() -> Vec<GridView> {
    let mut active_only = GridView::new("activeOnly", "Active only")
        .described("Status = Active")
        .all_columns();
    active_only.column_filters = vec![ColumnFilter::new(ColumnId::Status, "Active")];

    let mut high_amount = GridView::new("highAmount", "High amount")
        .described("Amount \u{2265} 10,000")
        .all_columns();
    high_amount.sorting = vec![ColumnSort::desc(ColumnId::Amount)];
    high_amount.column_filters = vec![ColumnFilter::new(ColumnId::Amount, "10000")];

    vec![
        GridView::new(DEFAULT_VIEW_ID, "Default")
            .described("All rows, all columns, no filters")
            .all_columns(),
        active_only,
        high_amount,
    ]
}
