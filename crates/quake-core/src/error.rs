use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Quake log parser.
#[derive(Error, Debug)]
pub enum QuakeError {
    /// The game log could not be opened or read from disk.
    #[error("Failed to read log file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written to its destination.
    #[error("Failed to write report to {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be serialized to JSON.
    #[error("Failed to serialize report: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the parser crates.
pub type Result<T> = std::result::Result<T, QuakeError>;
