//! Session listing and retrieval endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chatvault_core::{Session, SessionListing};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SessionsQuery {
    /// Keep sessions whose decoded project path contains this string.
    /// `"all"` and absence both mean no filtering.
    pub project: Option<String>,
}

/// GET /api/sessions - List sessions across all projects.
///
/// Sorted by `updated_at` descending and truncated to the first 50 after
/// sorting; `total` reports the pre-truncation count. The 50-session cap
/// is a contract the UI depends on.
pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionsQuery>,
) -> ApiResult<Json<SessionListing>> {
    let listing =
        chatvault_core::list_sessions(&state.config, query.project.as_deref()).await?;
    Ok(Json(listing))
}

/// GET /api/session/{id} - Get one session with its full message list.
///
/// Scans every project directory for `{id}.jsonl`; 404 when no project
/// has it.
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<Session>> {
    match chatvault_core::get_session(&state.config, &session_id).await? {
        Some(session) => Ok(Json(session)),
        None => Err(ApiError::SessionNotFound(session_id)),
    }
}

/// Create the sessions routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions", get(list_sessions))
        .route("/session/{id}", get(get_session))
}
