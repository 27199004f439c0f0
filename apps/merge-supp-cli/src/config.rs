use crate::error::{CliError, CliResult};
use merge_supp_tables::{
    MergeOptions, DEFAULT_NAME_LOOKUP, DEFAULT_OUTPUT, DEFAULT_PREFIX_LOOKUP, NICK_NAMES_FILE,
    PREFIX_FILE,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Merge configuration, optionally read from a YAML file
///
/// ```yaml
/// prefix_column: seat
/// name_column: FirstName
/// prefix_file: reference/prefixes.csv
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MergeConfig {
    /// Output CSV path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Input column used as the prefix table lookup key
    #[serde(default = "default_prefix_column")]
    pub prefix_column: String,

    /// Input column used as the nick name table lookup key
    #[serde(default = "default_name_column")]
    pub name_column: String,

    /// Prefix reference CSV
    #[serde(default = "default_prefix_file")]
    pub prefix_file: PathBuf,

    /// Nick name reference text file
    #[serde(default = "default_nick_names_file")]
    pub nick_names_file: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            prefix_column: default_prefix_column(),
            name_column: default_name_column(),
            prefix_file: default_prefix_file(),
            nick_names_file: default_nick_names_file(),
        }
    }
}

impl MergeConfig {
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.prefix_column.is_empty() {
            return Err(CliError::InvalidConfig(
                "prefix_column must not be empty".to_string(),
            ));
        }
        if self.name_column.is_empty() {
            return Err(CliError::InvalidConfig(
                "name_column must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            prefix_column: self.prefix_column.clone(),
            name_column: self.name_column.clone(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_prefix_column() -> String {
    DEFAULT_PREFIX_LOOKUP.to_string()
}

fn default_name_column() -> String {
    DEFAULT_NAME_LOOKUP.to_string()
}

fn default_prefix_file() -> PathBuf {
    PathBuf::from(PREFIX_FILE)
}

fn default_nick_names_file() -> PathBuf {
    PathBuf::from(NICK_NAMES_FILE)
}
