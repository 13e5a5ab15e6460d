// crates/core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can surface from storage traversal.
///
/// Only failures that break the top-level scan loop are represented here.
/// Per-entry failures (an unreadable project directory, a vanished file, a
/// failed stat) are recovered locally as "entry contributes nothing" and
/// never reach the caller.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Cannot access storage directory: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("IO error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Home directory not found")]
    HomeDirNotFound,
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }
}
