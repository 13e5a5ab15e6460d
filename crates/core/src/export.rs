// crates/core/src/export.rs
//! Portable session export.
//!
//! Exports bundle the raw transcript lines, not reparsed records, so the
//! document round-trips byte-for-byte whatever shape the lines are in.
//! Import is deliberately unimplemented (the stub lives in the server
//! crate); exports exist for backup and inspection.

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::scanner::{decode_project_path, encode_project_filter, list_project_dirs, list_session_files};
use crate::session::now_iso;
use crate::storage;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Format version written into every export document.
pub const EXPORT_VERSION: &str = "1.0";

/// One exported session: its id, decoded project, and raw non-blank
/// transcript lines in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct ExportedSession {
    pub id: String,
    pub project: String,
    pub content: Vec<String>,
}

/// A complete export bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: String,
    pub export_date: String,
    pub session_count: usize,
    pub sessions: Vec<ExportedSession>,
}

/// Assemble an export document for every session, optionally restricted to
/// projects whose encoded directory name contains the re-encoded filter
/// (`/` → `-`). `None` and `"all"` export everything.
pub async fn export_sessions(
    config: &StorageConfig,
    project_filter: Option<&str>,
) -> Result<ExportDocument, StorageError> {
    let projects_dir = config.projects_dir();
    let mut sessions: Vec<ExportedSession> = Vec::new();

    let encoded_filter = match project_filter {
        None | Some("all") => None,
        Some(filter) => Some(encode_project_filter(filter)),
    };

    for dir_name in list_project_dirs(config).await? {
        if let Some(filter) = &encoded_filter {
            if !dir_name.contains(filter.as_str()) {
                continue;
            }
        }

        let project_path = projects_dir.join(&dir_name);
        let project = decode_project_path(&dir_name);

        let files = list_session_files(&project_path).await;
        let reads = files.iter().map(|file| {
            let path = project_path.join(file);
            async move { storage::read_file(&path).await }
        });

        for (file, content) in files.iter().zip(join_all(reads).await) {
            let Some(content) = content else { continue };
            sessions.push(ExportedSession {
                id: file.trim_end_matches(".jsonl").to_string(),
                project: project.clone(),
                content: content
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string)
                    .collect(),
            });
        }
    }

    Ok(ExportDocument {
        version: EXPORT_VERSION.to_string(),
        export_date: now_iso(),
        session_count: sessions.len(),
        sessions,
    })
}
