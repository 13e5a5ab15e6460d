//! API route handlers for the chatvault server.

pub mod export;
pub mod health;
pub mod projects;
pub mod search;
pub mod sessions;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - GET /api/health - Health check
/// - GET /api/projects - List decoded project paths
/// - GET /api/projects/detailed - Projects with session counts and mtimes
/// - GET /api/sessions - List sessions (filter, sort, cap at 50)
/// - GET /api/session/{id} - Get one session with all messages
/// - GET /api/search - Substring search with highlights
/// - GET /api/search/full - Same engine, kept for client compatibility
/// - POST /api/export - Export raw session lines as a portable document
/// - POST /api/import - Import stub (always reports zero imported)
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", projects::router())
        .nest("/api", sessions::router())
        .nest("/api", search::router())
        .nest("/api", export::router())
        .with_state(state)
}
