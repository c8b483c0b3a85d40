//! specprune - Find and delete near-empty test spec files.
//!
//! Usage:
//!   specprune <PATH>                 Report which specs would be deleted
//!   specprune <PATH> --real-remove   Delete them
//!   specprune --help                 Show help

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use specprune_core::PruneConfig;
use specprune_ops::{BatchProcessor, Classifier, FsReader, FsRemover, Runner, StdConsole};
use specprune_scan::SpecScanner;

#[derive(Parser)]
#[command(
    name = "specprune",
    version,
    about = "Find and delete near-empty test spec files",
    long_about = "specprune scans a directory tree for `*.spec.ts` files and deletes the ones \
                  declaring exactly one `describe`. Without --real-remove nothing is deleted.\n\n\
                  Two pauses precede any work so the run can be aborted with Ctrl-C."
)]
struct Cli {
    /// Root directory to search for spec files
    path: Option<PathBuf>,

    /// Actually delete files (default is a dry run)
    #[arg(long)]
    real_remove: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PruneConfig::default();
    let scanner = SpecScanner::new(&config).context("Invalid spec pattern")?;
    let processor = BatchProcessor::new(FsReader, FsRemover, Classifier::from_config(&config));
    let runner = Runner::new(scanner, processor, config.delays);

    runner
        .run(cli.path.as_deref(), !cli.real_remove, &mut StdConsole)
        .await
        .context("Spec discovery failed")?;

    Ok(())
}

/// Install the stderr log subscriber, honoring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
