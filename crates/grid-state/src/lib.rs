//! Grid state for datamotion-grid.
//!
//! This crate holds everything about a grid that is not the rows
//! themselves: sort spec, column filters, global search, column visibility
//! and order, row selection and saved views.
//!
//! - [`GridState`] - the state value and its reducers
//! - [`GridView`] - a named snapshot of sort/filter/visibility/order state
//! - [`GridStore`] - owns a `GridState`, runs actions and notifies subscribers
//! - [`GridSnapshot`] - the persisted subset of the state
//!
//! # Example
//!
//! ```rust
//! use grid_core::ColumnId;
//! use grid_query::ColumnSort;
//! use grid_state::{predefined_views, GridStore};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut store = GridStore::default();
//! let notified = Rc::new(Cell::new(0));
//! let counter = notified.clone();
//! store.subscribe(move |_| counter.set(counter.get() + 1));
//!
//! store.update(|state| state.set_views(predefined_views()));
//! store.update(|state| state.apply_view("highAmount"));
//!
//! assert_eq!(store.state().sorting, vec![ColumnSort::desc(ColumnId::Amount)]);
//! assert_eq!(notified.get(), 2);
//! ```

pub mod snapshot;
pub mod state;
pub mod store;
pub mod view;

// Re-exports for convenience
pub use snapshot::GridSnapshot;
pub use state::{ColumnOrder, ColumnVisibility, GridState, RowSelection};
pub use store::{GridStore, SubscriptionId};
pub use view::{predefined_views, GridView, ViewPatch, DEFAULT_VIEW_ID};
