//! Export and import endpoints.
//!
//! Export bundles raw transcript lines into a portable JSON document.
//! Import is an intentional no-op stub: it validates the payload shape and
//! reports zero imported sessions. This is a deliberate product decision
//! (storage is read-only to this service), not a missing feature to wire up.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chatvault_core::ExportDocument;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportRequest {
    /// Optional decoded-path project filter, same semantics as search.
    pub project_filter: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../ui/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub success: bool,
    pub message: String,
    pub imported_count: usize,
}

/// POST /api/export - Assemble an export document of raw session lines.
pub async fn export_sessions(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExportRequest>,
) -> ApiResult<Json<ExportDocument>> {
    let document =
        chatvault_core::export_sessions(&state.config, request.project_filter.as_deref())
            .await?;
    Ok(Json(document))
}

/// POST /api/import - Import stub.
///
/// Validates that the payload carries `data.sessions`, then reports
/// success with `importedCount: 0`.
pub async fn import_sessions(Json(body): Json<Value>) -> ApiResult<Json<ImportResponse>> {
    let has_sessions = body
        .get("data")
        .and_then(|data| data.get("sessions"))
        .is_some();
    if !has_sessions {
        return Err(ApiError::BadRequest("Invalid import data".to_string()));
    }

    Ok(Json(ImportResponse {
        success: true,
        message: "Import functionality is not available in this version".to_string(),
        imported_count: 0,
    }))
}

/// Create the export routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/export", post(export_sessions))
        .route("/import", post(import_sessions))
}
