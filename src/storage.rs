//! Script loading and session snapshot persistence.

use crate::error::StorageError;
use crate::script::Script;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Abstraction over where authored scripts come from.
#[async_trait]
pub trait ScriptRepository: Send + Sync {
    /// Load a script by its logical name.
    async fn load_script(&self, name: &str) -> Result<Script, StorageError>;

    /// Check whether a script with this name exists.
    async fn script_exists(&self, name: &str) -> bool;
}

/// Loads `<base>/<name>.json` script files from the file system.
pub struct FileScriptRepository {
    base_path: PathBuf,
}

impl FileScriptRepository {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn script_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{name}.json"))
    }
}

#[async_trait]
impl ScriptRepository for FileScriptRepository {
    async fn load_script(&self, name: &str) -> Result<Script, StorageError> {
        let path = self.script_path(name);
        if !path.exists() {
            return Err(StorageError::NotFound {
                name: name.to_string(),
                base: self.base_path.display().to_string(),
            });
        }
        let content = tokio::fs::read_to_string(&path).await?;
        Ok(Script::from_json(&content)?)
    }

    async fn script_exists(&self, name: &str) -> bool {
        self.script_path(name).exists()
    }
}

/// Restorable part of a dialogue session: position and skip budget.
///
/// The digest ties the snapshot to the exact script content it was taken
/// against; restoring against anything else is refused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub index: usize,
    pub skip_counter: u32,
    pub script_digest: String,
}

/// Serialize a snapshot to JSON bytes.
pub fn save_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>, StorageError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    Ok(json.into_bytes())
}

/// Deserialize a snapshot from JSON bytes.
pub fn load_snapshot(bytes: &[u8]) -> Result<Snapshot, StorageError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trip() {
        let snapshot = Snapshot {
            index: 7,
            skip_counter: 3,
            script_digest: "abc123".to_string(),
        };

        let bytes = save_snapshot(&snapshot).unwrap();
        let restored = load_snapshot(&bytes).unwrap();
        assert_eq!(snapshot, restored);
    }

    #[test]
    fn load_invalid_snapshot_returns_error() {
        assert!(load_snapshot(b"not a snapshot").is_err());
    }

    #[tokio::test]
    async fn missing_script_is_not_found() {
        let repo = FileScriptRepository::new("/nonexistent/base");
        assert!(!repo.script_exists("intro").await);
        assert!(matches!(
            repo.load_script("intro").await,
            Err(StorageError::NotFound { .. })
        ));
    }
}
