// fuzz/fuzz_targets/session_parser.rs
//! Fuzz the transcript parser with arbitrary UTF-8 input.
//!
//! Transcript files come from outside this program and routinely contain
//! malformed lines. Parsing must never panic, and the derived fields must
//! hold their shape for any input whatsoever.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    let session = chatvault_core::parse_session(content, "fuzz-session", "/fuzz/project");

    // Derived fields keep their invariants no matter the input.
    assert_eq!(session.message_count, session.messages.len());
    assert!(!session.title.is_empty());
    assert!(session.preview.chars().count() <= 300 + 3);
});
