//! Market data access with an explicit live → synthetic fallback policy.
//!
//! Every call reports where its data actually came from; the substitution
//! is never silent beyond the warning log line.

use crate::services::TtlCache;
use crate::sources::{MarketDataSource, SyntheticSource};
use crate::types::{DailyBar, DataOrigin, DateRange, TickerEntry, TickerInfo};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Data access front for the analysis pipeline.
///
/// Tries the live source first and substitutes generated placeholder data
/// on any failure. Successful live fetches are cached in bounded TTL
/// caches; synthetic data is random by design and never cached.
pub struct MarketDataService {
    live: Arc<dyn MarketDataSource>,
    synthetic: SyntheticSource,
    series_cache: TtlCache<Vec<DailyBar>>,
    info_cache: TtlCache<TickerInfo>,
    listing_cache: TtlCache<Vec<TickerEntry>>,
}

impl MarketDataService {
    /// Create a service over the given live source.
    pub fn new(live: Arc<dyn MarketDataSource>, ttl: Duration, max_entries: usize) -> Arc<Self> {
        Arc::new(Self {
            live,
            synthetic: SyntheticSource::new(),
            series_cache: TtlCache::new(ttl, max_entries),
            info_cache: TtlCache::new(ttl, max_entries),
            listing_cache: TtlCache::new(ttl, 1),
        })
    }

    /// Daily price series for a ticker over an inclusive window.
    pub async fn daily_series(&self, code: &str, range: &DateRange) -> (Vec<DailyBar>, DataOrigin) {
        let key = format!("{}:{}-{}", code, range.start_compact(), range.end_compact());
        if let Some(bars) = self.series_cache.get(&key) {
            return (bars, DataOrigin::Live);
        }

        match self.live.daily_series(code, range).await {
            Ok(bars) if !bars.is_empty() => {
                self.series_cache.insert(key, bars.clone());
                (bars, DataOrigin::Live)
            }
            Ok(_) => {
                warn!("provider returned no rows for {}, using synthetic data", code);
                (self.synthetic.generate_daily_series(range), DataOrigin::Synthetic)
            }
            Err(e) => {
                warn!("daily fetch for {} failed ({}), using synthetic data", code, e);
                (self.synthetic.generate_daily_series(range), DataOrigin::Synthetic)
            }
        }
    }

    /// Static info record for a ticker.
    pub async fn ticker_info(&self, code: &str) -> (TickerInfo, DataOrigin) {
        if let Some(info) = self.info_cache.get(code) {
            return (info, DataOrigin::Live);
        }

        match self.live.ticker_info(code).await {
            Ok(info) => {
                self.info_cache.insert(code.to_string(), info.clone());
                (info, DataOrigin::Live)
            }
            Err(e) => {
                warn!("info fetch for {} failed ({}), using placeholder", code, e);
                (self.synthetic.placeholder_info(code), DataOrigin::Synthetic)
            }
        }
    }

    /// Ticker listing. Order is not guaranteed.
    pub async fn list_tickers(&self) -> (Vec<TickerEntry>, DataOrigin) {
        if let Some(tickers) = self.listing_cache.get("all") {
            return (tickers, DataOrigin::Live);
        }

        match self.live.list_tickers().await {
            Ok(tickers) if !tickers.is_empty() => {
                self.listing_cache.insert("all".to_string(), tickers.clone());
                (tickers, DataOrigin::Live)
            }
            Ok(_) => {
                warn!("provider returned an empty listing, using demo tickers");
                (self.synthetic.demo_tickers(), DataOrigin::Synthetic)
            }
            Err(e) => {
                warn!("listing fetch failed ({}), using demo tickers", e);
                (self.synthetic.demo_tickers(), DataOrigin::Synthetic)
            }
        }
    }
}
