// crates/core/src/lib.rs
//! Core session storage logic for chatvault.
//!
//! This crate owns everything below the HTTP layer: scanning the transcript
//! storage tree for projects, parsing line-delimited JSON session files into
//! normalized sessions, extracting display text from the several message
//! shapes found in the wild, building previews/titles, and assembling
//! raw-line export bundles.
//!
//! Storage is treated as read-only. Every entity is recomputed from the
//! filesystem on each call; there is no cache and no shared mutable state.

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod preview;
pub mod scanner;
pub mod session;
pub mod storage;
pub mod types;

pub use config::StorageConfig;
pub use error::StorageError;
pub use export::{export_sessions, ExportDocument, ExportedSession};
pub use extract::{classify, extract_content, MessageBody};
pub use preview::{build_preview, build_title};
pub use scanner::{list_project_dirs, list_projects, list_projects_detailed, list_session_files};
pub use session::{get_session, list_sessions, parse_session, SessionListing};
pub use types::{ProjectDetail, Session};
