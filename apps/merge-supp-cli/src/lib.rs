//! Command-line front end for the supplement merge.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use cli::Cli;
pub use config::MergeConfig;
pub use error::{CliError, CliResult};

use merge_supp_tables::MergeSummary;

/// Resolve the configuration for `cli` and run the merge
pub fn run(cli: &Cli) -> CliResult<MergeSummary> {
    let config = cli.resolve_config()?;
    commands::merge_supp::execute(&cli.input, &config)
}
