//! Command implementations.
//!
//! Every command writes its report to the given writer so the binary can
//! target stdout and tests can capture it.

use crate::cli::{
    Commands, DatasetArgs, QueryArgs, QueryOptions, StateArgs, ViewsCommand, WindowArgs,
};
use crate::config::GridSettings;
use crate::performance::measure_sync;
use crate::virtualization::{
    container_height, estimate_total_height, row_transform, visible_window, window_padding,
};
use anyhow::{bail, Context};
use dataset_export::{ExportArgs, Exporter};
use dataset_generator::{coerce_seed, generate_with_config, DatasetConfig};
use grid_core::{column_definition, Row};
use grid_persistence::{GridPersistence, StateStore, StorageBackend};
use grid_query::{ColumnFilter, ColumnRegistry, ColumnSort, RowModel};
use grid_state::{predefined_views, GridState};
use std::io::Write;
use tracing::{info, warn};

/// Run one parsed command.
pub fn run<W: Write>(
    settings: &GridSettings,
    command: Commands,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Commands::Generate { dataset, output } => run_generate(settings, &dataset, &output, out),
        Commands::Query(args) => run_query(settings, &args, out),
        Commands::Views { state, command } => run_views(&state, command, out),
        Commands::Window(args) => run_window(settings, &args, out),
    }
}

/// Generate the dataset described by `dataset`.
pub fn load_dataset(settings: &GridSettings, dataset: &DatasetArgs) -> anyhow::Result<Vec<Row>> {
    let row_count = dataset.row_count();
    let seed = coerce_seed(dataset.seed);
    if row_count > settings.max_rows {
        warn!(
            "Generating {} rows, above the configured maximum of {}",
            row_count, settings.max_rows
        );
    }

    let config = match &settings.dataset_config {
        Some(path) => DatasetConfig::from_file(path)
            .with_context(|| format!("Failed to load dataset config from {path:?}"))?,
        None => DatasetConfig::default(),
    };

    let (rows, sample) = measure_sync("generate dataset", settings.enable_debug_measures, || {
        generate_with_config(config, row_count, seed)
    });
    info!("Generated {} rows (seed {}) in {:?}", rows.len(), seed, sample.duration);
    Ok(rows)
}

fn run_generate<W: Write>(
    settings: &GridSettings,
    dataset: &DatasetArgs,
    output: &ExportArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let rows = load_dataset(settings, dataset)?;
    let exporter = Exporter::new(output.format).with_header(!output.no_header);

    match &output.output {
        Some(path) => {
            let metrics = exporter
                .export(path, &rows)
                .with_context(|| format!("Failed to write dataset to {path:?}"))?;
            writeln!(
                out,
                "Wrote {} rows ({} bytes) to {}",
                metrics.rows_written,
                metrics.file_size_bytes,
                path.display()
            )?;
        }
        None => {
            exporter
                .write(&mut *out, &rows)
                .context("Failed to write dataset")?;
        }
    }
    Ok(())
}

fn open_state(state: &StateArgs) -> (GridPersistence<Box<dyn StateStore>>, GridState) {
    let backend = StorageBackend::from_dir(state.state_dir.clone());
    let persistence = GridPersistence::new(backend.open());

    let mut grid = GridState::new();
    persistence.load(&mut grid);
    if grid.views.is_empty() {
        grid.set_views(predefined_views());
    }
    (persistence, grid)
}

/// Overlay command-line filters, search and sorts on `state`.
///
/// A filter replaces any existing filter on the same column; sorts replace
/// the whole sort spec.
pub fn apply_query_options(state: &mut GridState, options: &QueryOptions) -> anyhow::Result<()> {
    for raw in &options.filters {
        let filter: ColumnFilter = raw
            .parse()
            .with_context(|| format!("Invalid filter '{raw}'"))?;
        let column = filter.id;
        state.update_column_filters(|prev| {
            prev.iter()
                .filter(|existing| existing.id != column)
                .cloned()
                .chain(std::iter::once(filter))
                .collect()
        });
    }

    if let Some(search) = &options.search {
        state.set_global_filter(search.clone());
    }

    if !options.sorts.is_empty() {
        let sorting = options
            .sorts
            .iter()
            .map(|raw| {
                raw.parse::<ColumnSort>()
                    .with_context(|| format!("Invalid sort '{raw}'"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        state.set_sorting(sorting);
    }
    Ok(())
}

fn run_query<W: Write>(
    settings: &GridSettings,
    args: &QueryArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let (_, mut state) = open_state(&args.state);

    if let Some(view) = &args.view {
        if !state.apply_view(view) {
            bail!("Unknown view '{view}'");
        }
    } else if let Some(active) = state.active_view_id.clone() {
        if !state.apply_view(&active) {
            warn!("Ignoring unknown active view '{}'", active);
        }
    }
    apply_query_options(&mut state, &args.options)?;

    let rows = load_dataset(settings, &args.dataset)?;
    let registry = ColumnRegistry::default();
    let query = state.query_spec();
    let (model, sample) = measure_sync("row model", settings.enable_debug_measures, || {
        RowModel::compute(&rows, &query, &registry)
    });
    info!(
        "Row model: {} of {} rows in {:?}",
        model.filtered_rows(),
        model.total_rows,
        sample.duration
    );

    let columns = state.visible_columns();
    let header: Vec<String> = columns
        .iter()
        .map(|&column| {
            if args.labels {
                column_definition(column).label
            } else {
                column.as_str().to_string()
            }
        })
        .collect();
    writeln!(out, "{}", header.join("\t"))?;

    let page = model.page(args.offset, args.limit);
    for &index in page {
        let row = &rows[index];
        let cells: Vec<String> = columns
            .iter()
            .map(|column| row.get_value(*column).to_string())
            .collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }

    let (first, last) = if page.is_empty() {
        (0, 0)
    } else {
        (args.offset + 1, args.offset + page.len())
    };
    writeln!(
        out,
        "Showing {}-{} of {} rows ({} total, {} active filters)",
        first,
        last,
        model.filtered_rows(),
        model.total_rows,
        model.active_filter_count
    )?;
    Ok(())
}

fn run_views<W: Write>(
    state_args: &StateArgs,
    command: ViewsCommand,
    out: &mut W,
) -> anyhow::Result<()> {
    let (persistence, mut state) = open_state(state_args);

    match command {
        ViewsCommand::List => {
            for view in &state.views {
                let marker = if state.active_view_id.as_deref() == Some(view.id.as_str()) {
                    "*"
                } else {
                    " "
                };
                writeln!(
                    out,
                    "{} {}\t{}\t{}",
                    marker,
                    view.id,
                    view.name,
                    view.description.as_deref().unwrap_or("")
                )?;
            }
            return Ok(());
        }
        ViewsCommand::Create {
            name,
            description,
            options,
        } => {
            state.reset_sorting();
            state.reset_filters();
            apply_query_options(&mut state, &options)?;
            let id = state.create_view(name, description);
            writeln!(out, "Created view {id}")?;
        }
        ViewsCommand::Apply { id } => {
            if !state.apply_view(&id) {
                bail!("Unknown view '{id}'");
            }
            writeln!(out, "Applied view {id}")?;
        }
        ViewsCommand::Delete { id } => {
            if state.view(&id).is_none() {
                bail!("Unknown view '{id}'");
            }
            state.delete_view(&id);
            writeln!(out, "Deleted view {id}")?;
        }
    }

    if state_args.state_dir.is_none() {
        warn!("No --state-dir given; view changes are not persisted");
    }
    persistence
        .save(&state)
        .context("Failed to persist grid state")?;
    Ok(())
}

fn run_window<W: Write>(
    settings: &GridSettings,
    args: &WindowArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let row_height = args.row_height.unwrap_or(settings.row_height);
    let overscan = args.overscan.unwrap_or(settings.overscan);
    let item_count = usize::try_from(args.rows.max(0)).unwrap_or(usize::MAX);

    let total = estimate_total_height(args.rows, row_height);
    let items = visible_window(item_count, row_height, args.scroll, args.viewport, overscan);
    let (top, bottom) = window_padding(&items, total);

    writeln!(out, "index\tstart\tsize\ttransform")?;
    for item in &items {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            item.index,
            item.start,
            item.size,
            row_transform(item)
        )?;
    }
    writeln!(
        out,
        "Container height {}, padding top {}px, bottom {}px, {} rows rendered",
        container_height(total),
        top,
        bottom,
        items.len()
    )?;
    Ok(())
}
