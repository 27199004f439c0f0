//! Logging initialization.

use crate::error::{CliError, CliResult};
use clap::ValueEnum;
use merge_supp_tables::PROGRESS_TARGET;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::Targets, fmt, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Build the target filter; `quiet` switches off per-row progress only.
pub fn log_filter(level: LogLevel, quiet: bool) -> Targets {
    let filter = Targets::new().with_default(LevelFilter::from(level));
    if quiet {
        filter.with_target(PROGRESS_TARGET, LevelFilter::OFF)
    } else {
        filter
    }
}

/// Initialize logging to stderr so stdout stays free for status output.
pub fn init_logging(level: LogLevel, quiet: bool) -> CliResult<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(log_filter(level, quiet))
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_quiet_drops_progress_only() {
        let filter = log_filter(LogLevel::Info, true);
        assert!(!filter.would_enable(PROGRESS_TARGET, &Level::INFO));
        assert!(filter.would_enable("merge_supp_tables::nick_names", &Level::WARN));
        assert!(filter.would_enable("merge_supp_tables::merge", &Level::INFO));
    }

    #[test]
    fn test_level_applies_to_progress() {
        let filter = log_filter(LogLevel::Info, false);
        assert!(filter.would_enable(PROGRESS_TARGET, &Level::INFO));

        let filter = log_filter(LogLevel::Warn, false);
        assert!(!filter.would_enable(PROGRESS_TARGET, &Level::INFO));
        assert!(filter.would_enable("merge_supp_tables::nick_names", &Level::WARN));
    }
}
