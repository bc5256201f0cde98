//! CLI argument definitions for dataset export.

use crate::exporter::ExportFormat;
use clap::Args;
use std::path::PathBuf;

/// Output arguments shared by commands that write rows.
#[derive(Args, Clone, Debug)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Omit the CSV header row
    #[arg(long, default_value_t = false)]
    pub no_header: bool,
}
