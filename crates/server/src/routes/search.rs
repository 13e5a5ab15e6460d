//! Search endpoints.
//!
//! Two routes are exposed: `/search` (historic) and `/search/full`. Earlier
//! revisions gave them diverging field lists and highlight caps; both now
//! run the same unified engine so clients see one behavior regardless of
//! which path they were written against.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chatvault_search::SearchResult;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    /// The search query string. Required.
    pub q: Option<String>,
    /// Optional decoded-path project filter (`/` is re-encoded to `-` for
    /// directory matching). `"all"` means no filtering.
    pub project: Option<String>,
}

/// Search response wrapper.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../ui/types/generated/")]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// GET /api/search and GET /api/search/full - Substring search with
/// context-window highlights.
///
/// Query parameters:
/// - `q` (required): the substring to look for, case-insensitive
/// - `project`: optional project filter
pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<SearchResponse>> {
    let q = query.q.as_deref().unwrap_or("");
    if q.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Query parameter is required".to_string(),
        ));
    }

    let results =
        chatvault_search::search(&state.config, q, query.project.as_deref()).await?;
    Ok(Json(SearchResponse { results }))
}

/// Create the search routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search", get(search_handler))
        .route("/search/full", get(search_handler))
}
