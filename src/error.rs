//! Error types for roster.
//!
//! Uses `thiserror` for ergonomic error definitions. Each layer has its own
//! error enum and `Result` alias; the CLI error wraps them all.

use crate::types::{RecordId, RecordIdError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by record store operations.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("a record with id {0} already exists")]
    DuplicateIdentifier(RecordId),

    #[error("no record with id {0}")]
    NotFound(RecordId),

    #[error(transparent)]
    Persistence(#[from] StorageError),
}

impl From<RecordIdError> for RecordError {
    fn from(err: RecordIdError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// Result type alias for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Persistence failures while loading or saving the record file.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in record file: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("malformed record file: {0}")]
    Malformed(String),

    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a home directory for configuration")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_error_maps_to_invalid_input() {
        let err: RecordError = "abc".parse::<RecordId>().unwrap_err().into();
        assert!(matches!(err, RecordError::InvalidInput(_)));
    }

    #[test]
    fn test_error_messages() {
        let id = RecordId::new(7);
        assert_eq!(
            RecordError::DuplicateIdentifier(id).to_string(),
            "a record with id 7 already exists"
        );
        assert_eq!(RecordError::NotFound(id).to_string(), "no record with id 7");
    }
}
