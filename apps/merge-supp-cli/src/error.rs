use merge_supp_tables::{ErrorKind, SuppError};
use std::path::PathBuf;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

/// Exit status for I/O and CSV failures
pub const EXIT_IO: u8 = 1;
/// Exit status for missing reference files, missing columns and bad config files
pub const EXIT_CONFIGURATION: u8 = 2;
/// Exit status for an input row lacking a lookup column
pub const EXIT_MISSING_FIELD: u8 = 3;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Supp(#[from] SuppError),

    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Supp(e) => match e.kind() {
                ErrorKind::Configuration => EXIT_CONFIGURATION,
                ErrorKind::MissingField => EXIT_MISSING_FIELD,
                ErrorKind::Io => EXIT_IO,
            },
            CliError::ConfigRead { .. } | CliError::Yaml(_) | CliError::InvalidConfig(_) => {
                EXIT_CONFIGURATION
            }
            CliError::Logging(_) => EXIT_IO,
        }
    }
}
