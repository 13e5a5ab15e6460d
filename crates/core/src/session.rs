// crates/core/src/session.rs
//! Transcript parsing and session assembly.
//!
//! A transcript file holds one JSON record per line. Lines are parsed
//! independently: a malformed line is dropped silently and never aborts the
//! rest of the file. Session timestamps come from the first and last
//! parseable record in file order; files are not assumed to be
//! chronologically sorted, so `updated_at` may precede `created_at`.

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::preview::{build_preview, build_title};
use crate::scanner::{decode_project_path, list_project_dirs, list_session_files};
use crate::storage;
use crate::types::Session;
use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Sessions returned per listing request, after sorting.
pub const SESSION_LIST_LIMIT: usize = 50;

/// Result of a session listing. `total` counts every session found before
/// the listing was cut to [`SESSION_LIST_LIMIT`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/generated/")]
pub struct SessionListing {
    pub total: usize,
    pub sessions: Vec<Session>,
}

/// Current wall-clock time as an RFC 3339 string with millisecond
/// precision and a `Z` suffix.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A record's timestamp: the string `timestamp` field, else the string
/// `ts` field. Non-string values and empty strings do not qualify.
pub fn timestamp_of(msg: &Value) -> Option<&str> {
    msg.get("timestamp")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            msg.get("ts")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        })
}

/// Split transcript content into parsed records, dropping blank lines and
/// lines that fail to parse.
pub fn parse_lines(content: &str) -> Vec<Value> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect()
}

/// Parse one transcript file's content into a [`Session`].
///
/// `stem` is the filename without its `.jsonl` suffix and becomes the
/// session id; `project` is the decoded project path.
pub fn parse_session(content: &str, stem: &str, project: &str) -> Session {
    let messages = parse_lines(content);

    let created_at = messages
        .first()
        .and_then(timestamp_of)
        .map(str::to_string)
        .unwrap_or_else(now_iso);
    let updated_at = messages
        .last()
        .and_then(timestamp_of)
        .map(str::to_string)
        .unwrap_or_else(now_iso);

    Session {
        id: stem.to_string(),
        project: project.to_string(),
        title: build_title(&messages),
        created_at,
        updated_at,
        message_count: messages.len(),
        preview: build_preview(&messages),
        messages,
    }
}

/// List sessions across all projects, newest first.
///
/// `project_filter` keeps sessions whose decoded project path contains the
/// filter string; `None` and `"all"` keep everything. The listing is sorted
/// by `updated_at` descending and cut to [`SESSION_LIST_LIMIT`] entries;
/// `total` reports the pre-cut count.
pub async fn list_sessions(
    config: &StorageConfig,
    project_filter: Option<&str>,
) -> Result<SessionListing, StorageError> {
    let projects_dir = config.projects_dir();
    let mut sessions: Vec<Session> = Vec::new();

    for dir_name in list_project_dirs(config).await? {
        let project_path = projects_dir.join(&dir_name);
        let project = decode_project_path(&dir_name);

        let files = list_session_files(&project_path).await;
        let reads = files.iter().map(|file| {
            let path = project_path.join(file);
            async move { storage::read_file(&path).await }
        });

        for (file, content) in files.iter().zip(join_all(reads).await) {
            let Some(content) = content else { continue };
            // Files with nothing but blank lines contribute no session.
            if !content.lines().any(|l| !l.trim().is_empty()) {
                continue;
            }
            let stem = file.trim_end_matches(".jsonl");
            let session = parse_session(&content, stem, &project);
            let keep = match project_filter {
                None | Some("all") => true,
                Some(filter) => session.project.contains(filter),
            };
            if keep {
                sessions.push(session);
            }
        }
    }

    sessions.sort_by(|a, b| sort_key(&b.updated_at).cmp(&sort_key(&a.updated_at)));

    let total = sessions.len();
    sessions.truncate(SESSION_LIST_LIMIT);

    Ok(SessionListing { total, sessions })
}

/// Find a session by id, scanning every project directory for
/// `{id}.jsonl`. Returns `None` when no project has it.
pub async fn get_session(
    config: &StorageConfig,
    session_id: &str,
) -> Result<Option<Session>, StorageError> {
    let projects_dir = config.projects_dir();

    for dir_name in list_project_dirs(config).await? {
        let path = projects_dir.join(&dir_name).join(format!("{session_id}.jsonl"));
        if let Some(content) = storage::read_file(&path).await {
            let project = decode_project_path(&dir_name);
            return Ok(Some(parse_session(&content, session_id, &project)));
        }
    }

    Ok(None)
}

/// Sortable key for an RFC 3339 timestamp string. Unparseable strings sort
/// as the epoch so they sink to the end of a newest-first listing.
fn sort_key(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
