use crate::config::MergeConfig;
use crate::error::CliResult;
use merge_supp_tables::{merge_files, MergeSummary, SupplementTables};
use std::path::Path;

/// Load both reference tables, then merge `input` into the configured output
pub fn execute(input: &Path, config: &MergeConfig) -> CliResult<MergeSummary> {
    let options = config.merge_options();
    let tables = SupplementTables::load(
        &config.prefix_file,
        &options.prefix_column,
        &config.nick_names_file,
    )?;

    println!("Merging to '{}', please wait...", config.output.display());
    let summary = merge_files(input, &config.output, &options, &tables)?;

    println!(
        "{} rows written ({} prefixes, {} nick names matched)",
        summary.rows, summary.prefixes_matched, summary.nick_names_matched
    );
    println!("Done.");

    Ok(summary)
}
