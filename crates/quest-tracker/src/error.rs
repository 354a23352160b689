// error.rs — Error types for the tracker subsystem.

use quest_goal::GoalError;
use thiserror::Error;

/// Errors that can occur during tracker operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A goal creation request failed validation. Nothing was appended.
    #[error("invalid goal spec: {0}")]
    InvalidSpec(#[from] GoalError),

    /// The goal name would corrupt the pipe-separated save format.
    #[error("goal name must not contain '|' (got {0:?})")]
    InvalidName(String),

    /// An index referenced a goal that does not exist. Nothing was mutated.
    #[error("no goal at index {index} (collection has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A malformed line or field in a save document. Fatal to the whole
    /// load; the in-memory session stays as it was.
    #[error("corrupt save record at line {line}: {reason}")]
    CorruptRecord { line: usize, reason: String },

    /// The quest.toml config file could not be parsed.
    #[error("invalid config at {path}: {reason}")]
    Config { path: String, reason: String },

    /// Failed to serialize an event record.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
