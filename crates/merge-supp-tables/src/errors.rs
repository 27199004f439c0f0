use std::path::PathBuf;
use thiserror::Error;

pub type SuppResult<T> = Result<T, SuppError>;

#[derive(Error, Debug)]
pub enum SuppError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reference file not found: {}", path.display())]
    MissingReferenceFile { path: PathBuf },

    #[error("{file}: missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    #[error("Row #{row}: missing field '{column}'")]
    MissingField { row: usize, column: String },

    #[error("Row #{row}: expected at most {expected} fields, found {found}")]
    UnexpectedFieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Coarse classification used to pick a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reference file missing or a required column absent from a header.
    Configuration,
    /// An input row lacks a lookup column.
    MissingField,
    /// Anything raised by the filesystem or the CSV codec.
    Io,
}

impl SuppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SuppError::MissingReferenceFile { .. } | SuppError::MissingColumn { .. } => {
                ErrorKind::Configuration
            }
            SuppError::MissingField { .. } => ErrorKind::MissingField,
            SuppError::Csv(_) | SuppError::Io(_) | SuppError::UnexpectedFieldCount { .. } => {
                ErrorKind::Io
            }
        }
    }
}
