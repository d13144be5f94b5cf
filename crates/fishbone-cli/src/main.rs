//! Fishbone CLI - Command-line interface for fishbone root-cause analysis.

use anyhow::Context;
use clap::Parser;
use fishbone_cli::{Cli, Config};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (log to stderr so JSON output stays clean)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config, falling back to defaults when the file is absent
    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => Config::load().context("Failed to load config")?,
    };

    let output = fishbone_cli::execute(cli, config)?;
    println!("{}", output);
    Ok(())
}
