pub mod eastmoney;
pub mod synthetic;

pub use eastmoney::EastMoneyClient;
pub use synthetic::SyntheticSource;

use crate::error::Result;
use crate::types::{DailyBar, DateRange, TickerEntry, TickerInfo};
use async_trait::async_trait;

/// Capability implemented by every market data source.
///
/// The live provider and the synthetic placeholder generator both implement
/// this, which is also the seam test stubs plug into.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch the daily price series for a ticker over an inclusive window.
    async fn daily_series(&self, code: &str, range: &DateRange) -> Result<Vec<DailyBar>>;

    /// Fetch the static descriptive record for a ticker.
    async fn ticker_info(&self, code: &str) -> Result<TickerInfo>;

    /// List known tickers. Order is not guaranteed.
    async fn list_tickers(&self) -> Result<Vec<TickerEntry>>;
}
