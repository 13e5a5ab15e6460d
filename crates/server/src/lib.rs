// crates/server/src/lib.rs
//! Chatvault server library.
//!
//! This crate provides the Axum-based HTTP server for browsing and
//! searching archived chat-session transcripts. It serves a REST API over
//! the core scanning/parsing logic and the search engine; all storage is
//! read-only and re-scanned per request.

pub mod error;
pub mod routes;
pub mod state;

pub use error::*;
pub use routes::api_routes;
pub use state::AppState;

use axum::Router;
use chatvault_core::StorageConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
///
/// This sets up:
/// - API routes (health, projects, sessions, search, export)
/// - CORS for development (allows any origin)
/// - Request tracing
pub fn create_app(config: StorageConfig) -> Router {
    let state = AppState::new(config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================
