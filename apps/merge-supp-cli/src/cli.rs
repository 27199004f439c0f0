use crate::config::MergeConfig;
use crate::error::CliResult;
use crate::logging::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Merge supplement data (prefixes and nick names) into a names CSV.
///
/// Reference tables are read from `prefixes.csv` and `nick_names.txt` in the working
/// directory unless overridden.
#[derive(Parser, Debug)]
#[command(name = "merge-supp")]
#[command(about = "Merge supplement data into a names CSV")]
#[command(version)]
pub struct Cli {
    /// Input file name
    pub input: PathBuf,

    /// Output file in CSV (default: augmented_clean_names.csv)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Name of column used for prefix look up (default: seat)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Name of column used for nick name look up (default: FirstName)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Prefix reference CSV (default: prefixes.csv)
    #[arg(long)]
    pub prefix_file: Option<PathBuf>,

    /// Nick name reference file (default: nick_names.txt)
    #[arg(long)]
    pub nick_names_file: Option<PathBuf>,

    /// YAML config file; explicit options take precedence over it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Suppress per-row progress lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Built-in defaults, then the config file, then explicit options.
    pub fn resolve_config(&self) -> CliResult<MergeConfig> {
        let mut config = match &self.config {
            Some(path) => MergeConfig::from_file(path)?,
            None => MergeConfig::default(),
        };

        if let Some(out) = &self.out {
            config.output = out.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.prefix_column = prefix.clone();
        }
        if let Some(name) = &self.name {
            config.name_column = name.clone();
        }
        if let Some(prefix_file) = &self.prefix_file {
            config.prefix_file = prefix_file.clone();
        }
        if let Some(nick_names_file) = &self.nick_names_file {
            config.nick_names_file = nick_names_file.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
