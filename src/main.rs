#![forbid(unsafe_code)]
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use dirtree::cli::Args;
use dirtree::TreeConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    if let Err(e) = run_app() {
        eprintln!("dirtree: {e:#}");
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; stdout carries only the tree.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_app() -> Result<()> {
    let args = Args::parse();
    let config = TreeConfig::from(&args);

    info!(
        path = %args.path.display(),
        include_files = config.include_files,
        "rendering tree"
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = dirtree::render(&mut out, &args.path, &config);
    // Whatever was rendered before a failure stays visible.
    out.flush().context("failed to flush stdout")?;

    let lines = result.context("failed to render tree")?;
    info!(lines, "done");
    Ok(())
}
