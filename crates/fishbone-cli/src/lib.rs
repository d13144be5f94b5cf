//! Fishbone CLI library.
//!
//! This library provides the core functionality for the Fishbone command-line interface,
//! including configuration management, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

use anyhow::Context;
use cli::SelectAction;
use fishbone_domain::traits::CatalogSource;
use fishbone_domain::Catalog;
use fishbone_store::{JsonCatalogSource, JsonFileSelectionStore};
use std::path::PathBuf;
use tracing::debug;

/// Run a parsed command line against a loaded configuration and return the
/// text to print.
///
/// Command-line paths and output options override the configuration.
pub fn execute(cli: Cli, config: Config) -> anyhow::Result<String> {
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let catalog_path = match cli.catalog {
        Some(path) => PathBuf::from(path),
        None => config.catalog_file()?,
    };
    let selection_path = match cli.selection {
        Some(path) => PathBuf::from(path),
        None => config.selection_file()?,
    };
    debug!(
        "Using catalog {} and selection {}",
        catalog_path.display(),
        selection_path.display()
    );

    let load_catalog = || -> anyhow::Result<Catalog> {
        JsonCatalogSource::new(&catalog_path)
            .load_catalog()
            .map_err(CliError::from)
            .with_context(|| format!("Failed to load catalog from {}", catalog_path.display()))
    };
    let mut store = JsonFileSelectionStore::new(&selection_path);

    let output = match cli.command {
        Command::Catalog(args) => commands::execute_catalog(args, &load_catalog()?, &formatter)?,
        Command::Select(args) => {
            // Clearing never needs the catalog
            let catalog = match args.action {
                SelectAction::Clear => Catalog::empty(),
                _ => load_catalog()?,
            };
            commands::execute_select(args, &catalog, &mut store, &formatter)?
        }
        Command::Analyze(args) => {
            commands::execute_analyze(args, &load_catalog()?, &store, &config.correlation, &formatter)?
        }
        Command::Report(args) => {
            commands::execute_report(args, &load_catalog()?, &store, &config.correlation, &formatter)?
        }
    };

    Ok(output)
}
