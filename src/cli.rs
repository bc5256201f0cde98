//! Command-line definitions.

use clap::{Args, Parser, Subcommand};
use dataset_export::ExportArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "datamotion-grid")]
#[command(about = "Generate deterministic grid datasets and query them with saved views")]
#[command(long_about = None)]
pub struct Cli {
    /// Grid settings file (TOML)
    #[arg(long, global = true, env = "DATAMOTION_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a dataset and write it as JSON, JSON Lines or CSV
    Generate {
        #[command(flatten)]
        dataset: DatasetArgs,

        #[command(flatten)]
        output: ExportArgs,
    },

    /// Filter, search and sort a generated dataset
    Query(QueryArgs),

    /// Manage saved views
    Views {
        #[command(flatten)]
        state: StateArgs,

        #[command(subcommand)]
        command: ViewsCommand,
    },

    /// Show which rows a virtualized grid renders at a scroll position
    Window(WindowArgs),
}

/// Dataset size and seed.
#[derive(Args, Clone, Debug)]
pub struct DatasetArgs {
    /// Number of rows; negative counts produce an empty dataset
    #[arg(long, default_value_t = 20_000, env = "DATAMOTION_ROWS", allow_negative_numbers = true)]
    pub rows: i64,

    /// Generator seed; values outside u32 wrap
    #[arg(long, default_value_t = 42, env = "DATAMOTION_SEED", allow_negative_numbers = true)]
    pub seed: i64,
}

impl DatasetArgs {
    pub fn row_count(&self) -> usize {
        usize::try_from(self.rows.max(0)).unwrap_or(usize::MAX)
    }
}

/// Where grid state is persisted.
#[derive(Args, Clone, Debug)]
pub struct StateArgs {
    /// Directory for persisted grid state (in-memory when omitted)
    #[arg(long, env = "DATAMOTION_STATE_DIR")]
    pub state_dir: Option<PathBuf>,
}

/// Filter/sort options shared by `query` and `views create`.
#[derive(Args, Clone, Debug, Default)]
pub struct QueryOptions {
    /// Column filter as `column=value`; `a|b` matches any of the values
    #[arg(long = "filter", value_name = "COLUMN=VALUE")]
    pub filters: Vec<String>,

    /// Free-text search across all searchable columns
    #[arg(long)]
    pub search: Option<String>,

    /// Sort entry as `column[:asc|desc]`; repeat for multi-column sort
    #[arg(long = "sort", value_name = "COLUMN[:DIR]")]
    pub sorts: Vec<String>,
}

#[derive(Args, Clone, Debug)]
pub struct QueryArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub state: StateArgs,

    /// Apply a saved view before the command-line filters
    #[arg(long)]
    pub view: Option<String>,

    #[command(flatten)]
    pub options: QueryOptions,

    /// First row of the page
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Rows per page
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    /// Print column labels instead of keys in the header
    #[arg(long)]
    pub labels: bool,
}

#[derive(Subcommand, Clone, Debug)]
pub enum ViewsCommand {
    /// List saved views
    List,

    /// Save a view from filters and sorts
    Create {
        /// View name
        #[arg(long)]
        name: String,

        /// Optional description
        #[arg(long)]
        description: Option<String>,

        #[command(flatten)]
        options: QueryOptions,
    },

    /// Make a view active
    Apply {
        /// View id
        id: String,
    },

    /// Delete a view
    Delete {
        /// View id
        id: String,
    },
}

#[derive(Args, Clone, Debug)]
pub struct WindowArgs {
    /// Number of rows in the grid
    #[arg(long, allow_negative_numbers = true)]
    pub rows: i64,

    /// Scroll offset in px
    #[arg(long, default_value_t = 0)]
    pub scroll: u64,

    /// Viewport height in px
    #[arg(long, default_value_t = 600)]
    pub viewport: u64,

    /// Row height in px (settings value when omitted)
    #[arg(long)]
    pub row_height: Option<u32>,

    /// Overscan rows (settings value when omitted)
    #[arg(long)]
    pub overscan: Option<usize>,
}
