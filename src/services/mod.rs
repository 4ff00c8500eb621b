pub mod analyzer;
pub mod cache;
pub mod indicators;
pub mod market;

pub use analyzer::StockAnalyzer;
pub use cache::TtlCache;
pub use market::MarketDataService;
