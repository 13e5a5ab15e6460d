// crates/search/src/lib.rs
//! Full-text substring search over raw transcript lines.
//!
//! The engine scans `.jsonl` files directly rather than going through the
//! normalized session model: each line is parsed as standalone JSON and a
//! fixed list of candidate string fields is probed for a case-insensitive
//! substring match. Matches become bounded highlight windows with ellipsis
//! markers. There is no persistent index and no relevance scoring; every
//! query is a fresh scan.

pub mod engine;
pub mod types;

pub use engine::{search, SearchError, CONTEXT_WINDOW, MAX_HIGHLIGHTS, SEARCH_FIELDS};
pub use types::{Highlight, SearchResult};
