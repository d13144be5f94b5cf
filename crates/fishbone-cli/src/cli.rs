//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Fishbone CLI - Root-cause analysis over a catalog of fishbone causes.
#[derive(Debug, Parser)]
#[command(name = "fishbone")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FISHBONE_CONFIG")]
    pub config: Option<String>,

    /// Catalog JSON file
    #[arg(long, global = true, env = "FISHBONE_CATALOG")]
    pub catalog: Option<String>,

    /// Selection snapshot file
    #[arg(long, global = true, env = "FISHBONE_SELECTION")]
    pub selection: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalogued causes
    Catalog(CatalogArgs),

    /// Manage the current selection
    Select(SelectArgs),

    /// Correlate the selected causes
    Analyze(AnalyzeArgs),

    /// Build the full analysis report
    Report(ReportArgs),
}

/// Arguments for the catalog command.
#[derive(Debug, Parser)]
pub struct CatalogArgs {
    /// Only list this category (e.g. man, machine)
    #[arg(short = 'k', long)]
    pub category: Option<String>,
}

/// Arguments for selection management.
#[derive(Debug, Parser)]
pub struct SelectArgs {
    #[command(subcommand)]
    pub action: SelectAction,
}

/// Selection management actions.
#[derive(Debug, Subcommand)]
pub enum SelectAction {
    /// Add causes to a category
    Add {
        /// Category key
        category: String,
        /// Cause IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Remove causes from a category
    Remove {
        /// Category key
        category: String,
        /// Cause IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Show the current selection
    List,

    /// Forget the current selection
    Clear,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Number of top solutions (values below 1 are raised to 1)
    #[arg(short, long, allow_hyphen_values = true)]
    pub limit: Option<i64>,

    /// Minimum keyword occurrences (values below 2 are raised to 2)
    #[arg(short, long, allow_hyphen_values = true)]
    pub threshold: Option<i64>,
}

/// Arguments for the report command.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Name of the person who prepared the analysis
    #[arg(long, default_value = "")]
    pub creator: String,

    /// Name of the approving supervisor
    #[arg(long, default_value = "")]
    pub supervisor: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_add_command() {
        let cli = Cli::parse_from(["fishbone", "select", "add", "man", "man-001", "man-003"]);
        match cli.command {
            Command::Select(SelectArgs {
                action: SelectAction::Add { category, ids },
            }) => {
                assert_eq!(category, "man");
                assert_eq!(ids, vec!["man-001", "man-003"]);
            }
            _ => panic!("Expected Select Add command"),
        }
    }

    #[test]
    fn test_select_add_requires_ids() {
        assert!(Cli::try_parse_from(["fishbone", "select", "add", "man"]).is_err());
    }

    #[test]
    fn test_negative_limit_accepted() {
        let cli = Cli::parse_from(["fishbone", "analyze", "--limit", "-5"]);
        match cli.command {
            Command::Analyze(args) => assert_eq!(args.limit, Some(-5)),
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["fishbone", "catalog", "--format", "json", "--catalog", "c.json", "-v"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.catalog.as_deref(), Some("c.json"));
        assert!(cli.verbose);
    }
}
