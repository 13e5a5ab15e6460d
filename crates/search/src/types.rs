// crates/search/src/types.rs
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A bounded text window around a query match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    /// Index of the matched record among the file's successfully parsed
    /// lines. Lines that fail to parse do not advance this index.
    pub message_index: usize,
    /// The match with up to 100 characters of context on each side,
    /// whitespace collapsed, `...`-affixed where the window is interior.
    pub text: String,
}

/// One matching session file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub session_id: String,
    /// Timestamp of the first parseable record, or scan time if absent.
    pub session_date: String,
    /// CAUTION: this is the number of matched lines in the file, NOT the
    /// file's total message count. The name is a compatibility holdover
    /// that existing consumers depend on; do not reinterpret it.
    pub message_count: usize,
    /// Decoded project path.
    pub project: String,
    /// At most [`crate::MAX_HIGHLIGHTS`] highlights, in line order.
    pub highlights: Vec<Highlight>,
}
