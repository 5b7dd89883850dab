//! Error types for Segregator
//!
//! Startup failures (directories, watcher registration, config) are fatal.
//! Everything raised while handling a single file is reported and discarded
//! by the watch loop.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Segregator operations
pub type SegregatorResult<T> = Result<T, SegregatorError>;

/// Main error type for Segregator operations
#[derive(Error, Debug)]
pub enum SegregatorError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// A required directory could not be created
    #[error("failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Watcher creation or registration failed
    #[error("failed to watch {path}: {source}")]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    /// File attributes could not be read (vanished, permission denied)
    #[error("cannot read attributes of {path}: {source}")]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path has no final component to keep at the destination
    #[error("no file name in {path}")]
    NoFileName { path: PathBuf },

    /// Destination already holds an entry with the same name
    #[error("destination {path} already exists")]
    DestinationExists { path: PathBuf },

    /// Rename failed (cross-volume moves land here too)
    #[error("failed to move {from} to {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SegregatorError {
    /// Whether this error ends the process rather than a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Config { .. } | Self::CreateDirectory { .. } | Self::Watch { .. }
        )
    }
}
