//! Error types used across the crate.

use thiserror::Error;

/// Errors when loading or constructing a [`crate::script::Script`].
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script source was not valid JSON.
    #[error("failed to parse script: {0}")]
    Parse(#[from] serde_json::Error),
    /// A script must contain at least one line.
    #[error("script contains no dialogue lines")]
    Empty,
}

/// Errors when loading scripts or snapshots from storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse stored data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("script '{name}' not found under '{base}'")]
    NotFound { name: String, base: String },
}

/// Errors when restoring a session snapshot into an engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// The snapshot was taken against a different script.
    #[error("snapshot digest {snapshot} does not match script digest {script}")]
    DigestMismatch { snapshot: String, script: String },
    /// The recorded position does not exist in the script.
    #[error("snapshot index {index} out of range for script of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
