// crates/server/src/state.rs
//! Application state for the Axum server.

use chatvault_core::StorageConfig;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state accessible from all route handlers.
///
/// Holds only the server start time and the storage configuration: every
/// request recomputes its answer from the filesystem, so there is nothing
/// mutable to share between requests.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Where the transcript storage tree lives.
    pub config: StorageConfig,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(config: StorageConfig) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            config,
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
