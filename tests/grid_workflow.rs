//! A grid session across the workspace crates: generate, query, save a
//! view, persist and restore.

use dataset_generator::generate;
use grid_core::{ColumnId, Status};
use grid_persistence::{FilesystemStore, GridPersistence};
use grid_query::{ColumnFilter, ColumnRegistry, ColumnSort, RowModel};
use grid_state::{predefined_views, GridStore};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;

#[test]
fn test_generated_dataset_contract() {
    let rows = generate(10, 123);
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[9].id, 10);
    assert_eq!(generate(15, 42), generate(15, 42));
    assert_ne!(generate(1, 1)[0].name, generate(1, 2)[0].name);
}

#[test]
fn test_session_with_views_and_persistence() {
    let rows = generate(2_000, 42);
    let registry = ColumnRegistry::default();
    let temp_dir = TempDir::new().unwrap();

    let mut store = GridStore::with_views(predefined_views());
    let recomputed = Rc::new(RefCell::new(Vec::new()));
    {
        let rows = rows.clone();
        let registry = registry.clone();
        let recomputed = recomputed.clone();
        store.subscribe(move |state| {
            let model = RowModel::compute(&rows, &state.query_spec(), &registry);
            recomputed.borrow_mut().push(model.filtered_rows());
        });
    }

    assert!(store.apply_view("activeOnly"));
    store.update(|state| {
        state.set_sorting(vec![ColumnSort::desc(ColumnId::Amount)]);
        state.update_column_filters(|prev| {
            let mut next = prev.to_vec();
            next.push(ColumnFilter::new(ColumnId::Amount, "5000"));
            next
        });
        state.toggle_column_visibility(ColumnId::Email);
    });
    let id = store.create_view("Big active", Some("Active, amount >= 5000".into()));

    let model = RowModel::compute(&rows, &store.state().query_spec(), &registry);
    assert!(model.filtered_rows() > 0);
    let ordered: Vec<_> = model.rows(&rows).collect();
    assert!(ordered.iter().all(|r| r.status == Status::Active && r.amount >= 5000.0));
    assert!(ordered.windows(2).all(|p| p[0].amount >= p[1].amount));
    assert_eq!(recomputed.borrow().len(), 3);
    assert_eq!(recomputed.borrow()[1], model.filtered_rows());

    let persistence = GridPersistence::new(FilesystemStore::new(temp_dir.path()));
    persistence.save(store.state()).unwrap();

    let mut restored = GridStore::default();
    let snapshot = persistence.read_snapshot().unwrap();
    restored.hydrate(snapshot);
    assert_eq!(restored.state().active_view_id.as_deref(), Some(id.as_str()));
    assert!(!restored.state().is_column_visible(ColumnId::Email));

    assert!(restored.apply_view(&id));
    let again = RowModel::compute(&rows, &restored.state().query_spec(), &registry);
    assert_eq!(again.order, model.order);
}
