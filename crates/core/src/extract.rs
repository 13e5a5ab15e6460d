// crates/core/src/extract.rs
//! Message content extraction.
//!
//! Transcript lines arrive in several shapes depending on which client wrote
//! them: flat `{role, content}`, flat `{role, text}`, summary-only
//! `{summary}`, and the nested `{message: {content}}` form where `content`
//! is either a string or an array of typed blocks. Rather than probing
//! properties ad hoc at every call site, a line is first classified into an
//! explicit [`MessageBody`] variant; extraction then flattens that variant
//! to plain text.
//!
//! Both functions are total over arbitrary JSON: no shape is an error, and
//! anything unrecognized extracts to the empty string.

use serde_json::Value;

/// The recognized content shapes of a raw transcript line, in resolution
/// priority order. The first non-empty match wins; candidates whose value
/// is not exactly a string are skipped, never coerced, and an empty string
/// does not count as a match (the next candidate is probed instead).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody<'a> {
    /// Flat `content` string field.
    Content(&'a str),
    /// Flat `text` string field.
    Text(&'a str),
    /// Summary-only record.
    Summary(&'a str),
    /// Nested `message.content` string.
    NestedContent(&'a str),
    /// Nested `message.content` block array; holds the non-empty `text` of
    /// every `type == "text"` block, in original order.
    NestedBlocks(Vec<&'a str>),
    /// Nothing extractable.
    Empty,
}

/// A field's value as a non-empty string; anything else is no candidate.
fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Classify a raw line into its [`MessageBody`] variant.
pub fn classify(raw: &Value) -> MessageBody<'_> {
    if let Some(s) = non_empty_str(raw.get("content")) {
        return MessageBody::Content(s);
    }
    if let Some(s) = non_empty_str(raw.get("text")) {
        return MessageBody::Text(s);
    }
    if let Some(s) = non_empty_str(raw.get("summary")) {
        return MessageBody::Summary(s);
    }
    match raw.get("message").and_then(|m| m.get("content")) {
        Some(Value::String(s)) if !s.is_empty() => MessageBody::NestedContent(s),
        Some(Value::Array(blocks)) => {
            let texts = blocks
                .iter()
                .filter(|b| b.get("type").and_then(Value::as_str) == Some("text"))
                .filter_map(|b| b.get("text").and_then(Value::as_str))
                .filter(|t| !t.is_empty())
                .collect();
            MessageBody::NestedBlocks(texts)
        }
        _ => MessageBody::Empty,
    }
}

/// Extract display text from a raw transcript line.
///
/// Resolution order: `content`, `text`, `summary`, `message.content`
/// (string), `message.content` (text blocks joined by single spaces). A
/// candidate holding an empty string falls through to the next. Returns
/// `""` for every other shape, including non-object values.
pub fn extract_content(raw: &Value) -> String {
    match classify(raw) {
        MessageBody::Content(s)
        | MessageBody::Text(s)
        | MessageBody::Summary(s)
        | MessageBody::NestedContent(s) => s.to_string(),
        MessageBody::NestedBlocks(texts) => texts.join(" "),
        MessageBody::Empty => String::new(),
    }
}
