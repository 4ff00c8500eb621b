//! Augur - A-share stock analysis demo server
//!
//! Fetches daily price series from a public quote provider (or fabricates
//! placeholder data when the provider is unreachable), derives MA/RSI/MACD
//! indicator columns, and maps the classification to a canned
//! recommendation over a small JSON API.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use config::Config;
use services::{MarketDataService, StockAnalyzer};
use std::sync::Arc;

// Re-export commonly used types
pub use types::*;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub market: Arc<MarketDataService>,
    pub analyzer: Arc<StockAnalyzer>,
}

impl AppState {
    /// Wire the pipeline over an arbitrary live source.
    pub fn new(config: Arc<Config>, live: Arc<dyn sources::MarketDataSource>) -> Self {
        let market = MarketDataService::new(live, config.cache_ttl(), config.cache_max_entries);
        let analyzer = StockAnalyzer::new(market.clone());
        Self {
            config,
            market,
            analyzer,
        }
    }
}
