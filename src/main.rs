//! # sttgen CLI Entry Point

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use sttgen::{BackendSelection, Config, SystemMetadata};
use tracing_subscriber::EnvFilter;

/// Generate C and C++ state machine scaffolds from CSV state tables.
///
/// Every `.csv` file in the input directory is compiled into a
/// `<table>_c/` and a `<table>_cpp/` directory under the output directory.
#[derive(Parser, Debug)]
#[command(name = "sttgen", version, about)]
struct Cli {
    /// Directory searched for `.csv` tables.
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,

    /// Directory the generated directories are created in.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Which backends to generate.
    #[arg(long, value_enum, default_value_t)]
    backend: BackendSelection,

    /// Exit with a failure status when any table fails.
    #[arg(long)]
    strict: bool,

    /// Log filter, e.g. `debug` or `sttgen=trace`. Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Validate and render every table without writing any files.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config {
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
        backends: cli.backend.backends(),
        dry_run: cli.dry_run,
    };

    let summary = sttgen::run(&config, &SystemMetadata)?;
    if cli.strict && summary.has_failures() {
        bail!(
            "{} of {} tables failed",
            summary.failed(),
            summary.outcomes.len()
        );
    }
    Ok(())
}
