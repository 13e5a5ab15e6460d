//! Project listing endpoints.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chatvault_core::ProjectDetail;
use serde::Serialize;
use ts_rs::TS;

use crate::error::ApiResult;
use crate::state::AppState;

/// Wrapper around the detailed project list.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../ui/types/generated/")]
pub struct ProjectsDetailedResponse {
    pub projects: Vec<ProjectDetail>,
}

/// GET /api/projects - List decoded project paths.
pub async fn list_projects(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    let projects = chatvault_core::list_projects(&state.config).await?;
    Ok(Json(projects))
}

/// GET /api/projects/detailed - Projects with session counts and the most
/// recent transcript modification time.
pub async fn list_projects_detailed(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ProjectsDetailedResponse>> {
    let projects = chatvault_core::list_projects_detailed(&state.config).await?;
    Ok(Json(ProjectsDetailedResponse { projects }))
}

/// Create the projects routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/detailed", get(list_projects_detailed))
}
