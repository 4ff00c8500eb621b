//! Ticker listing endpoint.

use crate::api::ApiResponse;
use crate::types::TickerEntry;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/tickers", get(list_tickers))
}

/// List known tickers. Order is not guaranteed.
async fn list_tickers(State(state): State<AppState>) -> Json<ApiResponse<Vec<TickerEntry>>> {
    let (tickers, origin) = state.market.list_tickers().await;
    Json(ApiResponse::new(tickers, origin))
}
