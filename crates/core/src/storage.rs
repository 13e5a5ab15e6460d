// crates/core/src/storage.rs
//! Fail-soft filesystem capability helpers.
//!
//! Transcript storage may shift underneath us (files pruned mid-scan,
//! permissions tightened on a single project). Every helper here recovers
//! per-entry failures as "nothing there" so one bad entry never aborts a
//! whole request. Only `read_dir` on the storage root propagates, and the
//! scanner decides what to do with that.

use std::path::Path;
use std::time::SystemTime;
use tokio::fs;
use tracing::debug;

/// List entry names in a directory, sorted. Failures yield an empty list.
pub async fn list_directory(path: &Path) -> Vec<String> {
    let mut entries = match fs::read_dir(path).await {
        Ok(entries) => entries,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "directory unreadable, treating as empty");
            return Vec::new();
        }
    };

    let mut names = Vec::new();
    while let Ok(Some(entry)) = entries.next_entry().await {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    // Deterministic aggregation order, independent of readdir order.
    names.sort();
    names
}

/// Modification time of a path, or `None` if the stat fails.
pub async fn stat_mtime(path: &Path) -> Option<SystemTime> {
    match fs::metadata(path).await {
        Ok(meta) => meta.modified().ok(),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "stat failed");
            None
        }
    }
}

/// Whether a path is a directory. Stat failures count as "no".
pub async fn is_directory(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

/// Read a file to a string, or `None` on any failure.
pub async fn read_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path).await {
        Ok(content) => Some(content),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "file unreadable, skipping");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_directory_sorted() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(dir.path().join("b.jsonl"), "").await.unwrap();
        tokio::fs::write(dir.path().join("a.jsonl"), "").await.unwrap();
        tokio::fs::write(dir.path().join("c.txt"), "").await.unwrap();

        let names = list_directory(dir.path()).await;
        assert_eq!(names, vec!["a.jsonl", "b.jsonl", "c.txt"]);
    }

    #[tokio::test]
    async fn test_list_directory_missing_is_empty() {
        let names = list_directory(Path::new("/nonexistent/chatvault-test")).await;
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_stat_mtime() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("x.jsonl");
        tokio::fs::write(&file, "{}").await.unwrap();

        assert!(stat_mtime(&file).await.is_some());
        assert!(stat_mtime(&dir.path().join("missing")).await.is_none());
    }

    #[tokio::test]
    async fn test_is_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("x.jsonl");
        tokio::fs::write(&file, "{}").await.unwrap();

        assert!(is_directory(dir.path()).await);
        assert!(!is_directory(&file).await);
        assert!(!is_directory(Path::new("/nonexistent/chatvault-test")).await);
    }

    #[tokio::test]
    async fn test_read_file_missing_is_none() {
        assert!(read_file(Path::new("/nonexistent/chatvault-test.jsonl")).await.is_none());
    }
}
