//! Daily series and ticker info endpoints.

use crate::api::ApiResponse;
use crate::error::Result;
use crate::types::{DateRange, EnrichedSeries, TickerInfo};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

/// Query parameters naming an inclusive date window.
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    /// Window start, `YYYYMMDD`.
    pub start: String,
    /// Window end, `YYYYMMDD`.
    pub end: String,
}

impl WindowQuery {
    pub fn range(&self) -> Result<DateRange> {
        DateRange::parse(&self.start, &self.end)
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/daily/:code", get(get_daily))
        .route("/api/info/:code", get(get_info))
}

/// Daily series with indicator columns for one ticker.
async fn get_daily(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<ApiResponse<EnrichedSeries>>> {
    let range = query.range()?;
    let (series, origin) = state.analyzer.enriched_series(&code, &range).await;
    Ok(Json(ApiResponse::new(series, origin)))
}

/// Static info record for one ticker.
async fn get_info(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Json<ApiResponse<TickerInfo>> {
    let (info, origin) = state.market.ticker_info(&code).await;
    Json(ApiResponse::new(info, origin))
}
