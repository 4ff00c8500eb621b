//! Analysis endpoint.

use crate::api::market::WindowQuery;
use crate::api::ApiResponse;
use crate::error::{AppError, Result};
use crate::types::AnalysisResult;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/analysis/:code", get(get_analysis))
}

/// Run the full analysis pipeline for one ticker over a date window.
///
/// Failures surface as a generic message; the pipeline itself never
/// propagates a panic or a provider error to the client.
async fn get_analysis(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<ApiResponse<AnalysisResult>>> {
    let range = query.range()?;

    let result = state
        .analyzer
        .analyze(&code, &range)
        .await
        .ok_or_else(|| {
            AppError::NotFound(format!("analysis failed for {} - check the ticker code", code))
        })?;

    let origin = result.origin;
    Ok(Json(ApiResponse::new(result, origin)))
}
