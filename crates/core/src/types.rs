// crates/core/src/types.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// A project directory with derived metadata.
///
/// Projects have no persisted identity; everything here is recomputed from
/// the filesystem on every scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    /// Display name: the trailing segment of the encoded directory name.
    pub name: String,
    /// Canonical path: the directory name with `-` replaced by `/`.
    pub path: String,
    /// Number of `.jsonl` transcript files in the directory.
    pub session_count: usize,
    /// Max modification time over the transcript files (RFC 3339), or the
    /// epoch if there are none or every stat failed.
    pub last_updated: String,
}

/// A parsed transcript session.
///
/// `created_at`/`updated_at` come from the first/last parseable line's
/// timestamp. "Last" means last in file order, so `updated_at` can precede
/// `created_at` when a file is not chronologically ordered; that is left as
/// observed rather than clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/generated/")]
pub struct Session {
    /// The transcript filename with its `.jsonl` suffix stripped.
    pub id: String,
    /// Decoded project path this session belongs to.
    pub project: String,
    /// First user message's content, or `"Untitled Session"`.
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
    /// Raw message records, one per successfully parsed line. Lines that
    /// fail to parse are dropped and do not appear here.
    pub messages: Vec<Value>,
    #[serde(rename = "messageCount")]
    pub message_count: usize,
    /// Bounded multi-message preview of the opening of the conversation.
    pub preview: String,
}
