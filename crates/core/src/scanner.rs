// crates/core/src/scanner.rs
//! Project discovery over the transcript storage tree.
//!
//! Projects are directories under `<root>/projects/`, named by the
//! delimiter-encoded filesystem path of the workspace they belong to
//! (`/home/dev/vault` is stored as `-home-dev-vault`). Scanning is
//! recompute-on-every-call; nothing is cached between requests.

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::storage;
use crate::types::ProjectDetail;
use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::future::join_all;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Decode an encoded project directory name to its canonical path:
/// every `-` becomes `/`.
pub fn decode_project_path(encoded: &str) -> String {
    encoded.replace('-', "/")
}

/// Display name of a project: the trailing `-` segment of the encoded
/// directory name, or the whole name when the trailing segment is empty.
pub fn display_name(encoded: &str) -> String {
    match encoded.rsplit('-').next() {
        Some(last) if !last.is_empty() => last.to_string(),
        _ => encoded.to_string(),
    }
}

/// Re-encode a decoded project path for directory-name matching:
/// every `/` becomes `-`.
pub fn encode_project_filter(filter: &str) -> String {
    filter.replace('/', "-")
}

/// List encoded project directory names, sorted.
///
/// Hidden entries (leading `.`) and non-directories are excluded. A missing
/// projects directory is an empty list, not an error; only an unreadable
/// storage root propagates.
pub async fn list_project_dirs(config: &StorageConfig) -> Result<Vec<String>, StorageError> {
    let projects_dir = config.projects_dir();

    let mut entries = match fs::read_dir(&projects_dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %projects_dir.display(), "projects directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(StorageError::io(projects_dir, e)),
    };

    let mut names = Vec::new();
    while let Ok(Some(entry)) = entries.next_entry().await {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        if !storage::is_directory(&entry.path()).await {
            continue;
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}

/// List decoded project paths, sorted by encoded name.
pub async fn list_projects(config: &StorageConfig) -> Result<Vec<String>, StorageError> {
    let dirs = list_project_dirs(config).await?;
    Ok(dirs.iter().map(|d| decode_project_path(d)).collect())
}

/// List projects with derived metadata: session count and the most recent
/// transcript modification time.
pub async fn list_projects_detailed(
    config: &StorageConfig,
) -> Result<Vec<ProjectDetail>, StorageError> {
    let projects_dir = config.projects_dir();
    let dirs = list_project_dirs(config).await?;

    let details = dirs.iter().map(|dir_name| {
        let path = projects_dir.join(dir_name);
        async move {
            let files = list_session_files(&path).await;
            let stats = join_all(files.iter().map(|f| {
                let file_path = path.join(f);
                async move { storage::stat_mtime(&file_path).await }
            }))
            .await;

            let last_updated = stats
                .into_iter()
                .flatten()
                .max()
                .map(|mtime| DateTime::<Utc>::from(mtime))
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
                .to_rfc3339_opts(SecondsFormat::Millis, true);

            ProjectDetail {
                name: display_name(dir_name),
                path: decode_project_path(dir_name),
                session_count: files.len(),
                last_updated,
            }
        }
    });

    Ok(join_all(details).await)
}

/// List `.jsonl` transcript filenames in a project directory, sorted.
/// Failures yield an empty list.
pub async fn list_session_files(project_dir: &Path) -> Vec<String> {
    storage::list_directory(project_dir)
        .await
        .into_iter()
        .filter(|name| name.ends_with(".jsonl"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    async fn make_project(root: &TempDir, name: &str, files: &[(&str, &str)]) {
        let dir = root.path().join("projects").join(name);
        tokio::fs::create_dir_all(&dir).await.unwrap();
        for (file, content) in files {
            tokio::fs::write(dir.join(file), content).await.unwrap();
        }
    }

    // ========================================================================
    // Name encoding
    // ========================================================================

    #[test]
    fn test_decode_project_path() {
        assert_eq!(decode_project_path("-home-dev-vault"), "/home/dev/vault");
        assert_eq!(decode_project_path("plain"), "plain");
        assert_eq!(decode_project_path(""), "");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("-home-dev-vault"), "vault");
        assert_eq!(display_name("plain"), "plain");
        assert_eq!(display_name("trailing-"), "trailing-");
    }

    #[test]
    fn test_encode_project_filter() {
        assert_eq!(encode_project_filter("/home/dev/vault"), "-home-dev-vault");
        assert_eq!(encode_project_filter("vault"), "vault");
    }

    // ========================================================================
    // list_project_dirs / list_projects
    // ========================================================================

    #[tokio::test]
    async fn test_list_project_dirs_filters_hidden_and_files() {
        let root = TempDir::new().unwrap();
        make_project(&root, "-home-dev-beta", &[]).await;
        make_project(&root, "-home-dev-alpha", &[]).await;
        make_project(&root, ".hidden", &[]).await;
        tokio::fs::write(root.path().join("projects").join("stray.txt"), "x")
            .await
            .unwrap();

        let config = StorageConfig::new(root.path());
        let dirs = list_project_dirs(&config).await.unwrap();
        assert_eq!(dirs, vec!["-home-dev-alpha", "-home-dev-beta"]);
    }

    #[tokio::test]
    async fn test_list_project_dirs_missing_root() {
        let config = StorageConfig::new("/nonexistent/chatvault-test");
        let dirs = list_project_dirs(&config).await.unwrap();
        assert!(dirs.is_empty());
    }

    #[tokio::test]
    async fn test_list_projects_decodes() {
        let root = TempDir::new().unwrap();
        make_project(&root, "-home-dev-vault", &[]).await;

        let config = StorageConfig::new(root.path());
        let projects = list_projects(&config).await.unwrap();
        assert_eq!(projects, vec!["/home/dev/vault"]);
    }

    // ========================================================================
    // list_projects_detailed
    // ========================================================================

    #[tokio::test]
    async fn test_detailed_counts_and_names() {
        let root = TempDir::new().unwrap();
        make_project(
            &root,
            "-home-dev-vault",
            &[("a.jsonl", "{}"), ("b.jsonl", "{}"), ("notes.txt", "x")],
        )
        .await;

        let config = StorageConfig::new(root.path());
        let details = list_projects_detailed(&config).await.unwrap();

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].name, "vault");
        assert_eq!(details[0].path, "/home/dev/vault");
        assert_eq!(details[0].session_count, 2);
        assert!(details[0].last_updated.starts_with("20"));
    }

    #[tokio::test]
    async fn test_detailed_epoch_when_no_sessions() {
        let root = TempDir::new().unwrap();
        make_project(&root, "-home-dev-empty", &[("notes.txt", "x")]).await;

        let config = StorageConfig::new(root.path());
        let details = list_projects_detailed(&config).await.unwrap();
        assert_eq!(details[0].session_count, 0);
        assert_eq!(details[0].last_updated, "1970-01-01T00:00:00.000Z");
    }

    // ========================================================================
    // list_session_files
    // ========================================================================

    #[tokio::test]
    async fn test_list_session_files_only_jsonl() {
        let root = TempDir::new().unwrap();
        make_project(
            &root,
            "-p",
            &[("b.jsonl", ""), ("a.jsonl", ""), ("c.json", ""), ("d.txt", "")],
        )
        .await;

        let files = list_session_files(&root.path().join("projects").join("-p")).await;
        assert_eq!(files, vec!["a.jsonl", "b.jsonl"]);
    }

    #[tokio::test]
    async fn test_list_session_files_missing_dir() {
        let files = list_session_files(Path::new("/nonexistent/chatvault-test")).await;
        assert!(files.is_empty());
    }
}
