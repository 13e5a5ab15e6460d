// crates/search/src/engine.rs
//! The substring search engine.

use crate::types::{Highlight, SearchResult};
use chatvault_core::preview::collapse_whitespace;
use chatvault_core::scanner::{
    decode_project_path, encode_project_filter, list_project_dirs, list_session_files,
};
use chatvault_core::session::{now_iso, timestamp_of};
use chatvault_core::{storage, StorageConfig, StorageError};
use futures_util::future::join_all;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

/// Candidate fields probed per line, in priority order. The first string
/// field containing the query wins; at most one highlight per line.
pub const SEARCH_FIELDS: [&str; 7] = [
    "content", "text", "message", "input", "output", "query", "response",
];

/// Characters of context kept on each side of a match.
pub const CONTEXT_WINDOW: usize = 100;

/// Highlights kept per session file.
pub const MAX_HIGHLIGHTS: usize = 5;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search query must not be empty")]
    EmptyQuery,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Search every project's transcript files for a case-insensitive
/// substring match.
///
/// `project_filter` restricts the scan to projects whose encoded directory
/// name contains the re-encoded filter (`/` → `-`); `None` and `"all"`
/// scan everything. Results follow scan order: projects sorted by encoded
/// name, files sorted within each project. Files with no highlights are
/// omitted; unreadable files are skipped.
pub async fn search(
    config: &StorageConfig,
    query: &str,
    project_filter: Option<&str>,
) -> Result<Vec<SearchResult>, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    let query_lower = query.to_lowercase();

    let encoded_filter = match project_filter {
        None | Some("all") => None,
        Some(filter) => Some(encode_project_filter(filter)),
    };

    let projects_dir = config.projects_dir();
    let mut results: Vec<SearchResult> = Vec::new();
    let mut files_searched = 0usize;

    for dir_name in list_project_dirs(config).await? {
        if let Some(filter) = &encoded_filter {
            if !dir_name.contains(filter.as_str()) {
                continue;
            }
        }

        let project_path = projects_dir.join(&dir_name);
        let project = decode_project_path(&dir_name);

        let files = list_session_files(&project_path).await;
        files_searched += files.len();

        let scans = files.iter().map(|file| {
            let path = project_path.join(file);
            let stem = file.trim_end_matches(".jsonl").to_string();
            let project = project.clone();
            let query_lower = &query_lower;
            async move {
                let content = storage::read_file(&path).await?;
                scan_transcript(&content, &stem, &project, query, query_lower)
            }
        });

        results.extend(join_all(scans).await.into_iter().flatten());
    }

    info!(
        query = %query,
        files_searched,
        results = results.len(),
        "search complete"
    );

    Ok(results)
}

/// Scan one transcript's content. Returns `None` when nothing matched.
fn scan_transcript(
    content: &str,
    stem: &str,
    project: &str,
    query: &str,
    query_lower: &str,
) -> Option<SearchResult> {
    let mut highlights: Vec<Highlight> = Vec::new();
    let mut session_date: Option<String> = None;
    let mut message_index = 0usize;

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        // Malformed lines are dropped without advancing the message index,
        // matching how the session parser numbers its records.
        let Ok(msg) = serde_json::from_str::<Value>(line) else {
            continue;
        };

        if message_index == 0 {
            session_date = timestamp_of(&msg).map(str::to_string);
        }

        if let Some(text) = match_fields(&msg, query_lower) {
            highlights.push(Highlight {
                message_index,
                text,
            });
        } else if let Some(tool_calls) = msg.get("tool_calls").filter(|v| !v.is_null()) {
            if tool_calls.to_string().to_lowercase().contains(query_lower) {
                highlights.push(Highlight {
                    message_index,
                    text: format!("[Tool call containing \"{query}\"]"),
                });
            }
        }

        message_index += 1;
    }

    if highlights.is_empty() {
        return None;
    }

    // The compatibility quirk: messageCount is the matched-line count,
    // taken before the highlight list is cut to MAX_HIGHLIGHTS.
    let message_count = highlights.len();
    highlights.truncate(MAX_HIGHLIGHTS);

    Some(SearchResult {
        session_id: stem.to_string(),
        session_date: session_date.unwrap_or_else(now_iso),
        message_count,
        project: project.to_string(),
        highlights,
    })
}

/// Probe the candidate fields of one record for the query. Returns the
/// highlight window of the first matching string field.
fn match_fields(msg: &Value, query_lower: &str) -> Option<String> {
    for field in SEARCH_FIELDS {
        let Some(value) = msg.get(field).and_then(Value::as_str) else {
            continue;
        };
        let lower = value.to_lowercase();
        if let Some(match_idx) = lower.find(query_lower) {
            return Some(highlight_window(value, match_idx, query_lower.len()));
        }
    }
    None
}

/// Cut a context window around a match and mark interior edges with `...`.
///
/// `match_idx` is a byte offset into the lowercased field; case folding
/// can shift byte lengths, so both edges are clamped to char boundaries of
/// the original string.
fn highlight_window(field: &str, match_idx: usize, query_len: usize) -> String {
    let start = floor_boundary(field, match_idx.saturating_sub(CONTEXT_WINDOW));
    let end = floor_boundary(field, match_idx + query_len + CONTEXT_WINDOW);

    let mut text = collapse_whitespace(&field[start..end]);
    if start > 0 {
        text = format!("...{text}");
    }
    if end < field.len() {
        text = format!("{text}...");
    }
    text
}

/// Largest char boundary of `s` that is `<= idx`, with `idx` clamped to
/// the string's length.
fn floor_boundary(s: &str, idx: usize) -> usize {
    let mut idx = idx.min(s.len());
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
