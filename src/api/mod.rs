pub mod analysis;
pub mod health;
pub mod market;
pub mod tickers;

use crate::types::DataOrigin;
use crate::AppState;
use axum::Router;
use serde::Serialize;

/// API response wrapper.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ApiMeta,
}

#[derive(Serialize)]
pub struct ApiMeta {
    /// Whether the payload was built from live or synthetic data.
    pub origin: DataOrigin,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, origin: DataOrigin) -> Self {
        Self {
            data,
            meta: ApiMeta { origin },
        }
    }
}

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(tickers::router())
        .merge(market::router())
        .merge(analysis::router())
}
