//! snapdiff - Interactive TUI viewer for database snapshot diffs.
//!
//! Reads a diff document produced by the snapshot backend and presents it
//! table by table: paired before/after rows, colored cell statuses,
//! pagination, no-diff column hiding and mouse column resizing.
//!
//! Usage:
//!   snapdiff diff.json                # view a saved diff document
//!   snapdiff diff.json --page-size 50 # larger pages
//!   snapdiff diff.json --expanded     # start with truncation off

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use snapdiff_core::bridge::FileBackend;
use snapdiff_core::layout::LayoutConfig;

use crate::app::App;

/// Interactive TUI viewer for database snapshot diffs.
#[derive(Parser)]
#[command(name = "snapdiff", about = "Database snapshot diff viewer")]
struct Args {
    /// Path to a saved diff document (JSON).
    #[arg(value_name = "DIFF_FILE")]
    diff_file: PathBuf,

    /// Rows per page.
    #[arg(long, default_value_t = 30)]
    page_size: usize,

    /// Start with truncation disabled (full column widths).
    #[arg(long)]
    expanded: bool,
}

fn main() {
    // Logs go to stderr; RUST_LOG controls verbosity. The alternate screen
    // owns stdout while the TUI runs.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.page_size == 0 {
        eprintln!("Error: --page-size must be at least 1");
        std::process::exit(1);
    }

    let backend = match FileBackend::load(&args.diff_file) {
        Ok(b) => b,
        Err(e) => {
            eprintln!(
                "Error loading diff from '{}': {}",
                args.diff_file.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let diff = backend.diff().clone();
    if diff.table_diffs.is_empty() {
        eprintln!("Error: diff document contains no tables");
        std::process::exit(1);
    }

    let mut config = LayoutConfig::terminal_cells();
    config.page_size = args.page_size;

    let app = App::new(diff, config, args.expanded);
    if let Err(e) = app.run(Duration::from_millis(250)) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
