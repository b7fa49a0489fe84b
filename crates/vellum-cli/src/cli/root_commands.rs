use clap::{Args, Subcommand};

use crate::cli::subcommands::ContractCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize vellum for a project.
    Init(InitArgs),
    /// Contract records.
    Contract {
        #[command(subcommand)]
        action: ContractCommands,
    },
    /// Spend analytics over a date interval.
    Analyze(AnalyzeArgs),
    /// Distinct vendor names across all contracts.
    Vendors,
    /// Distinct contract types across all contracts.
    Types,
}

/// Arguments for `vlm init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to current directory).
    #[arg(default_value = ".")]
    pub path: String,
}

/// Arguments for `vlm analyze`.
#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Interval start (YYYY-MM-DD). Defaults to January 1 of this year.
    #[arg(long)]
    pub start: Option<String>,
    /// Interval end (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub end: Option<String>,
    /// Yearly spend policy: lump_sum, prorated. Defaults to config.
    #[arg(long)]
    pub yearly_policy: Option<String>,
    /// Size of the top-contracts ranking. Defaults to config.
    #[arg(long)]
    pub top: Option<usize>,
}
