// crates/core/src/config.rs
//! Storage configuration.
//!
//! The storage root is resolved once at startup and passed explicitly to
//! every operation. No module-level globals: handlers and tests construct
//! their own `StorageConfig` pointing wherever they like.

use crate::error::StorageError;
use std::path::{Path, PathBuf};

/// Environment variable overriding the storage root.
pub const ROOT_ENV_VAR: &str = "CHATVAULT_ROOT";

/// Location of the transcript storage tree.
///
/// The tree is laid out as `<root>/projects/<encoded-project>/<session>.jsonl`,
/// where `<encoded-project>` is a filesystem path with `/` replaced by `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    root: PathBuf,
}

impl StorageConfig {
    /// Create a config rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the storage root from the environment.
    ///
    /// Uses `CHATVAULT_ROOT` when set, otherwise `~/.claude`.
    ///
    /// # Errors
    /// Returns `StorageError::HomeDirNotFound` if no override is set and the
    /// home directory cannot be determined.
    pub fn from_env() -> Result<Self, StorageError> {
        if let Ok(root) = std::env::var(ROOT_ENV_VAR) {
            return Ok(Self::new(root));
        }
        let home = dirs::home_dir().ok_or(StorageError::HomeDirNotFound)?;
        Ok(Self::new(home.join(".claude")))
    }

    /// The storage root itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory holding one subdirectory per project.
    pub fn projects_dir(&self) -> PathBuf {
        self.root.join("projects")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_root() {
        let config = StorageConfig::new("/tmp/vault");
        assert_eq!(config.root(), Path::new("/tmp/vault"));
        assert_eq!(config.projects_dir(), PathBuf::from("/tmp/vault/projects"));
    }

    #[test]
    fn test_projects_dir_is_under_root() {
        let config = StorageConfig::new("/data/archive");
        assert!(config.projects_dir().starts_with(config.root()));
        assert!(config.projects_dir().ends_with("projects"));
    }
}
