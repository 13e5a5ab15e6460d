// crates/core/src/preview.rs
//! Session preview and title building.
//!
//! A preview is a `" | "`-joined run of `"Role: content"` fragments built
//! from the opening messages of a session, with two budgets: each message's
//! content is cut at 100 characters, and the whole preview at 300. The
//! title is the first user message's content, verbatim.

use crate::extract::extract_content;
use serde_json::Value;

/// How many opening messages a preview may draw from.
const PREVIEW_MESSAGE_COUNT: usize = 5;
/// Total preview budget, in characters.
const PREVIEW_MAX_CHARS: usize = 300;
/// Per-message content budget, in characters.
const MESSAGE_MAX_CHARS: usize = 100;
/// Minimum leftover budget worth spending on a truncated tail fragment.
const MIN_TAIL_CHARS: usize = 20;

/// Title returned when no user message with extractable content exists.
pub const UNTITLED: &str = "Untitled Session";

/// Collapse all runs of whitespace (including newlines) to single spaces
/// and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve the display role of a raw message.
///
/// A `role` field wins over a `type` field; anything that is not `user` or
/// `assistant` displays as `System`, as does a message with neither field.
fn display_role(msg: &Value) -> &'static str {
    let role = msg
        .get("role")
        .and_then(Value::as_str)
        .or_else(|| msg.get("type").and_then(Value::as_str));
    match role {
        Some("user") => "User",
        Some("assistant") => "Assistant",
        _ => "System",
    }
}

/// Whether a raw message originated from the user.
fn is_user_message(msg: &Value) -> bool {
    match msg.get("role").and_then(Value::as_str) {
        Some(role) => role == "user",
        None => msg.get("type").and_then(Value::as_str) == Some("user"),
    }
}

/// Truncate to `max` characters, appending `...` when anything was cut.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}

/// Build a bounded preview from the opening messages of a session.
///
/// Considers at most the first five messages. Each becomes a
/// `"Role: content"` fragment with whitespace collapsed and content cut at
/// 100 characters. Fragments accumulate into a 300-character budget joined
/// by `" | "`; when the next fragment would overflow, a truncated tail is
/// appended only if at least 20 characters of budget remain.
pub fn build_preview(messages: &[Value]) -> String {
    let mut fragments: Vec<String> = Vec::new();
    let mut used = 0usize;

    for msg in messages.iter().take(PREVIEW_MESSAGE_COUNT) {
        let content = collapse_whitespace(&extract_content(msg));
        let fragment = format!(
            "{}: {}",
            display_role(msg),
            truncate_chars(&content, MESSAGE_MAX_CHARS)
        );
        let len = fragment.chars().count();

        if used + len > PREVIEW_MAX_CHARS {
            let remaining = PREVIEW_MAX_CHARS - used;
            if remaining > MIN_TAIL_CHARS {
                let tail: String = fragment.chars().take(remaining).collect();
                fragments.push(format!("{tail}..."));
            }
            break;
        }

        fragments.push(fragment);
        used += len + 3; // separator cost
    }

    fragments.join(" | ")
}

/// Derive a session title: the first user message's extracted content,
/// verbatim and untruncated. Assistant and system messages are never title
/// sources. Falls back to [`UNTITLED`] when no user message has content.
pub fn build_title(messages: &[Value]) -> String {
    for msg in messages {
        if !is_user_message(msg) {
            continue;
        }
        let content = extract_content(msg);
        if !content.is_empty() {
            return content;
        }
    }
    UNTITLED.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // ========================================================================
    // build_title
    // ========================================================================

    #[test]
    fn test_title_empty_session() {
        assert_eq!(build_title(&[]), "Untitled Session");
    }

    #[test]
    fn test_title_first_user_message_verbatim() {
        let messages = vec![
            json!({"role": "assistant", "content": "ignored"}),
            json!({"role": "user", "content": "Calculate 2+2"}),
        ];
        assert_eq!(build_title(&messages), "Calculate 2+2");
    }

    #[test]
    fn test_title_no_truncation() {
        let long = "x".repeat(5000);
        let messages = vec![json!({"role": "user", "content": long})];
        assert_eq!(build_title(&messages).len(), 5000);
    }

    #[test]
    fn test_title_skips_empty_user_messages() {
        let messages = vec![
            json!({"role": "user"}),
            json!({"role": "user", "content": "second"}),
        ];
        assert_eq!(build_title(&messages), "second");
    }

    #[test]
    fn test_title_empty_content_falls_through_to_text() {
        let messages = vec![json!({"role": "user", "content": "", "text": "hello"})];
        assert_eq!(build_title(&messages), "hello");
    }

    #[test]
    fn test_title_type_tagged_user() {
        let messages = vec![
            json!({"type": "assistant", "message": {"content": "no"}}),
            json!({"type": "user", "message": {"content": "from type tag"}}),
        ];
        assert_eq!(build_title(&messages), "from type tag");
    }

    #[test]
    fn test_title_only_assistant_messages() {
        let messages = vec![json!({"role": "assistant", "content": "hello"})];
        assert_eq!(build_title(&messages), "Untitled Session");
    }

    #[test]
    fn test_title_tool_call_shaped_content_is_usable() {
        // A serialized tool invocation block in the first user message still
        // becomes the title; filtering for display is the UI's concern.
        let block = r#"<tool_call>{"name":"calculator","input":"2+2"}</tool_call>"#;
        let messages = vec![json!({"role": "user", "content": block})];
        assert_eq!(build_title(&messages), block);
    }

    // ========================================================================
    // build_preview
    // ========================================================================

    #[test]
    fn test_preview_basic_format() {
        let messages = vec![
            json!({"role": "user", "content": "Calculate 2+2", "timestamp": "2024-01-01T00:00:00Z"}),
            json!({"role": "assistant", "content": "The answer is 4."}),
        ];
        let preview = build_preview(&messages);
        assert_eq!(preview, "User: Calculate 2+2 | Assistant: The answer is 4.");
    }

    #[test]
    fn test_preview_role_fallbacks() {
        let messages = vec![
            json!({"type": "user", "content": "a"}),
            json!({"type": "assistant", "content": "b"}),
            json!({"type": "summary", "summary": "c"}),
            json!({"content": "d"}),
        ];
        let preview = build_preview(&messages);
        assert_eq!(preview, "User: a | Assistant: b | System: c | System: d");
    }

    #[test]
    fn test_preview_collapses_whitespace() {
        let messages = vec![json!({"role": "user", "content": "line one\n\nline   two\t end "})];
        assert_eq!(build_preview(&messages), "User: line one line two end");
    }

    #[test]
    fn test_preview_truncates_long_message() {
        let messages = vec![json!({"role": "user", "content": "a".repeat(250)})];
        let preview = build_preview(&messages);
        // "User: " + 100 chars + "..."
        assert_eq!(preview.chars().count(), 6 + 100 + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_preview_considers_at_most_five_messages() {
        let messages: Vec<Value> = (0..8)
            .map(|i| json!({"role": "user", "content": format!("m{i}")}))
            .collect();
        let preview = build_preview(&messages);
        assert!(preview.contains("m4"));
        assert!(!preview.contains("m5"));
    }

    #[test]
    fn test_preview_total_budget() {
        let messages: Vec<Value> = (0..5)
            .map(|_| json!({"role": "user", "content": "w".repeat(150)}))
            .collect();
        let preview = build_preview(&messages);
        // Budget of 300 plus a trailing ellipsis on the tail fragment.
        assert!(preview.chars().count() <= PREVIEW_MAX_CHARS + 3);
        assert!(preview.contains(" | "));
    }

    #[test]
    fn test_preview_skips_tail_below_minimum_budget() {
        // Fragments of 140 chars each: the first two fit (used = 286);
        // the third overflows with only 300 - 286 = 14 remaining, below the
        // 20-char minimum, so no tail fragment is added.
        let long = "y".repeat(134); // fragment = "User: " + 134 = 140 chars
        let messages = vec![
            json!({"role": "user", "content": long.clone()}),
            json!({"role": "user", "content": long.clone()}),
            json!({"role": "user", "content": long}),
        ];
        let preview = build_preview(&messages);
        let fragments: Vec<&str> = preview.split(" | ").collect();
        assert_eq!(fragments.len(), 2);
        assert!(preview.chars().count() <= PREVIEW_MAX_CHARS + 3);
    }

    #[test]
    fn test_preview_empty_messages() {
        assert_eq!(build_preview(&[]), "");
    }

    #[test]
    fn test_preview_empty_content_falls_through_to_text() {
        let messages = vec![json!({"role": "user", "content": "", "text": "hello"})];
        assert_eq!(build_preview(&messages), "User: hello");
    }

    // ========================================================================
    // collapse_whitespace
    // ========================================================================

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a\n\nb\t c  "), "a b c");
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
