//! Synthetic placeholder data for offline / provider-failure operation.
//!
//! Shapes match the live provider exactly (daily frequency over the
//! requested window, same record types); only the values are random.

use crate::error::Result;
use crate::sources::MarketDataSource;
use crate::types::{DailyBar, DateRange, TickerEntry, TickerInfo};
use async_trait::async_trait;
use rand::Rng;

/// Starting price for the random walk.
const BASE_PRICE: f64 = 100.0;

/// Demo ticker table, used when the live listing is unavailable.
pub const DEMO_TICKERS: &[(&str, &str)] = &[
    ("000001", "平安银行"),
    ("600000", "浦发银行"),
    ("000858", "五粮液"),
    ("600036", "招商银行"),
    ("000333", "美的集团"),
];

/// Generator for placeholder market data.
#[derive(Debug, Default)]
pub struct SyntheticSource;

impl SyntheticSource {
    pub fn new() -> Self {
        Self
    }

    /// Generate a daily series covering every day of the window.
    ///
    /// Close follows a random walk around [`BASE_PRICE`] with a ±1% daily
    /// step; open/high/low are jittered off close and volume is uniform in
    /// [1,000,000, 5,000,000). Dates are ascending with no duplicates.
    pub fn generate_daily_series(&self, range: &DateRange) -> Vec<DailyBar> {
        let mut rng = rand::thread_rng();
        let mut close = BASE_PRICE;
        let mut bars = Vec::new();

        for date in range.days() {
            let step: f64 = rng.gen_range(-1.0..1.0);
            close *= 1.0 + step / 100.0;

            let open = close * (1.0 + rng.gen_range(-0.005..0.005));
            let spread: f64 = rng.gen_range(0.0..0.01);
            let high = close.max(open) * (1.0 + spread);
            let low = close.min(open) * (1.0 - spread);

            bars.push(DailyBar {
                date,
                open,
                close,
                high,
                low,
                volume: rng.gen_range(1_000_000..5_000_000),
            });
        }

        bars
    }

    /// Fixed placeholder info record. Only the code echoes the request.
    pub fn placeholder_info(&self, code: &str) -> TickerInfo {
        TickerInfo {
            code: code.to_string(),
            name: "平安银行".to_string(),
            industry: "银行".to_string(),
            pe_ratio: Some(8.5),
            pb_ratio: Some(0.8),
            total_market_cap: Some(300_000_000_000.0),
            float_market_cap: Some(250_000_000_000.0),
            week52_high: Some(15.88),
            week52_low: Some(9.88),
            eps: Some(1.28),
        }
    }

    /// The demo ticker listing.
    pub fn demo_tickers(&self) -> Vec<TickerEntry> {
        DEMO_TICKERS
            .iter()
            .map(|(code, name)| TickerEntry {
                code: (*code).to_string(),
                name: (*name).to_string(),
            })
            .collect()
    }
}

#[async_trait]
impl MarketDataSource for SyntheticSource {
    async fn daily_series(&self, _code: &str, range: &DateRange) -> Result<Vec<DailyBar>> {
        Ok(self.generate_daily_series(range))
    }

    async fn ticker_info(&self, code: &str) -> Result<TickerInfo> {
        Ok(self.placeholder_info(code))
    }

    async fn list_tickers(&self) -> Result<Vec<TickerEntry>> {
        Ok(self.demo_tickers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::parse(start, end).unwrap()
    }

    #[test]
    fn test_series_covers_window() {
        let source = SyntheticSource::new();
        let r = range("20230101", "20230131");
        let bars = source.generate_daily_series(&r);
        assert_eq!(bars.len(), 31);
        assert_eq!(bars.first().unwrap().date, r.start);
        assert_eq!(bars.last().unwrap().date, r.end);
    }

    #[test]
    fn test_series_dates_ascending_unique() {
        let source = SyntheticSource::new();
        let bars = source.generate_daily_series(&range("20230101", "20230301"));
        for pair in bars.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_series_value_bounds() {
        let source = SyntheticSource::new();
        let bars = source.generate_daily_series(&range("20230101", "20231231"));
        for bar in &bars {
            assert!(bar.close > 0.0);
            assert!(bar.high >= bar.close.max(bar.open));
            assert!(bar.low <= bar.close.min(bar.open));
            assert!((1_000_000..5_000_000).contains(&bar.volume));
        }
    }

    #[test]
    fn test_inverted_window_yields_empty_series() {
        let source = SyntheticSource::new();
        let bars = source.generate_daily_series(&range("20230301", "20230101"));
        assert!(bars.is_empty());
    }

    #[test]
    fn test_placeholder_info_echoes_code() {
        let source = SyntheticSource::new();
        let info = source.placeholder_info("600036");
        assert_eq!(info.code, "600036");
        assert_eq!(info.industry, "银行");
        assert_eq!(info.pe_ratio, Some(8.5));
    }

    #[test]
    fn test_demo_tickers() {
        let source = SyntheticSource::new();
        let tickers = source.demo_tickers();
        assert_eq!(tickers.len(), 5);
        assert!(tickers.iter().any(|t| t.code == "000001"));
    }
}
