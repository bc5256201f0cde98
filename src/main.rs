//! Command-line interface for datamotion-grid
//!
//! # Usage Examples
//!
//! ```bash
//! # Default dataset (20,000 rows, seed 42) as JSON
//! datamotion-grid generate > rows.json
//!
//! # JSON Lines with a different seed, size taken from the environment
//! DATAMOTION_ROWS=5000 datamotion-grid generate --seed 7 --format jsonl -o rows.jsonl
//!
//! # Second page of pending rows sorted by creation date
//! datamotion-grid query --filter status=Pending --sort createdAt:desc --offset 20 --limit 20
//!
//! # List views persisted in a directory
//! datamotion-grid views --state-dir .grid list
//! ```

use anyhow::Context;
use clap::Parser;
use datamotion_grid::cli::Cli;
use datamotion_grid::{commands, GridSettings};

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = GridSettings::load(cli.config.as_deref())
        .with_context(|| format!("Failed to load settings from {:?}", cli.config))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&settings, cli.command, &mut out)
}
