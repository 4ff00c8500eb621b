//! EastMoney quote API client for A-share market data.
//!
//! Daily kline history, per-ticker snapshots, and the exchange listing,
//! all from the public push2 endpoints (no API key).

use crate::error::{AppError, Result};
use crate::sources::MarketDataSource;
use crate::types::{DailyBar, DateRange, TickerEntry, TickerInfo};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const KLINE_URL: &str = "https://push2his.eastmoney.com/api/qt/stock/kline/get";
const SNAPSHOT_URL: &str = "https://push2.eastmoney.com/api/qt/stock/get";
const LISTING_URL: &str = "https://push2.eastmoney.com/api/qt/clist/get";

/// Kline history response.
#[derive(Debug, Deserialize)]
struct KlineResponse {
    data: Option<KlineData>,
}

#[derive(Debug, Deserialize)]
struct KlineData {
    klines: Vec<String>,
}

/// Per-ticker snapshot response.
#[derive(Debug, Deserialize)]
struct SnapshotResponse {
    data: Option<SnapshotData>,
}

/// Snapshot fields. Absent metrics arrive as `"-"`, so the numeric ones are
/// kept as raw JSON values and coerced afterwards.
#[derive(Debug, Deserialize)]
struct SnapshotData {
    #[serde(rename = "f57")]
    code: Option<String>,
    #[serde(rename = "f58")]
    name: Option<String>,
    #[serde(rename = "f127")]
    industry: Option<String>,
    #[serde(rename = "f162", default)]
    pe_dynamic: Option<serde_json::Value>,
    #[serde(rename = "f167", default)]
    pb: Option<serde_json::Value>,
    #[serde(rename = "f116", default)]
    total_market_cap: Option<serde_json::Value>,
    #[serde(rename = "f117", default)]
    float_market_cap: Option<serde_json::Value>,
    #[serde(rename = "f174", default)]
    week52_high: Option<serde_json::Value>,
    #[serde(rename = "f175", default)]
    week52_low: Option<serde_json::Value>,
    #[serde(rename = "f55", default)]
    eps: Option<serde_json::Value>,
}

/// Exchange listing response.
#[derive(Debug, Deserialize)]
struct ListingResponse {
    data: Option<ListingData>,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    diff: Vec<ListingRow>,
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(rename = "f12")]
    code: String,
    #[serde(rename = "f14")]
    name: String,
}

/// Build the `secid` the quote API expects: market prefix `1` for Shanghai
/// (codes starting with 6), `0` for Shenzhen.
fn secid(code: &str) -> String {
    if code.starts_with('6') {
        format!("1.{}", code)
    } else {
        format!("0.{}", code)
    }
}

/// Parse one kline row: `date,open,close,high,low,volume[,...]`.
fn parse_kline(line: &str) -> Option<DailyBar> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 6 {
        return None;
    }

    Some(DailyBar {
        date: NaiveDate::parse_from_str(fields[0], "%Y-%m-%d").ok()?,
        open: fields[1].parse().ok()?,
        close: fields[2].parse().ok()?,
        high: fields[3].parse().ok()?,
        low: fields[4].parse().ok()?,
        volume: fields[5].parse::<f64>().ok()? as u64,
    })
}

/// Coerce a snapshot metric to a number; `"-"` and friends become `None`.
fn metric(value: &Option<serde_json::Value>) -> Option<f64> {
    value.as_ref().and_then(|v| v.as_f64())
}

/// EastMoney REST client.
pub struct EastMoneyClient {
    client: Client,
}

impl EastMoneyClient {
    /// Create a new client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    async fn fetch_klines(&self, code: &str, range: &DateRange) -> Result<Vec<DailyBar>> {
        let url = format!(
            "{}?secid={}&klt=101&fqt=1&beg={}&end={}&fields1=f1,f2,f3,f4,f5,f6&fields2=f51,f52,f53,f54,f55,f56",
            KLINE_URL,
            secid(code),
            range.start_compact(),
            range.end_compact()
        );

        debug!("Fetching daily klines: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "kline request for {} returned {}",
                code,
                response.status()
            )));
        }

        let body: KlineResponse = response.json().await?;
        let data = body
            .data
            .ok_or_else(|| AppError::ExternalApi(format!("no kline data for {}", code)))?;

        Ok(data.klines.iter().filter_map(|l| parse_kline(l)).collect())
    }

    async fn fetch_snapshot(&self, code: &str) -> Result<TickerInfo> {
        let url = format!(
            "{}?secid={}&invt=2&fields=f55,f57,f58,f116,f117,f127,f162,f167,f174,f175",
            SNAPSHOT_URL,
            secid(code)
        );

        debug!("Fetching ticker snapshot: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "snapshot request for {} returned {}",
                code,
                response.status()
            )));
        }

        let body: SnapshotResponse = response.json().await?;
        let data = body
            .data
            .ok_or_else(|| AppError::ExternalApi(format!("no snapshot data for {}", code)))?;

        Ok(TickerInfo {
            code: data.code.unwrap_or_else(|| code.to_string()),
            name: data.name.unwrap_or_default(),
            industry: data.industry.unwrap_or_default(),
            // Ratio fields come scaled by 100.
            pe_ratio: metric(&data.pe_dynamic).map(|v| v / 100.0),
            pb_ratio: metric(&data.pb).map(|v| v / 100.0),
            total_market_cap: metric(&data.total_market_cap),
            float_market_cap: metric(&data.float_market_cap),
            week52_high: metric(&data.week52_high),
            week52_low: metric(&data.week52_low),
            eps: metric(&data.eps),
        })
    }

    async fn fetch_listing(&self) -> Result<Vec<TickerEntry>> {
        // Main-board Shenzhen and Shanghai equities, one page.
        let url = format!(
            "{}?pn=1&pz=5000&po=1&np=1&fltt=2&invt=2&fid=f12&fs=m:0+t:6,m:0+t:80,m:1+t:2,m:1+t:23&fields=f12,f14",
            LISTING_URL
        );

        debug!("Fetching ticker listing");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "listing request returned {}",
                response.status()
            )));
        }

        let body: ListingResponse = response.json().await?;
        let data = body
            .data
            .ok_or_else(|| AppError::ExternalApi("no listing data".to_string()))?;

        Ok(data
            .diff
            .into_iter()
            .map(|row| TickerEntry {
                code: row.code,
                name: row.name,
            })
            .collect())
    }
}

#[async_trait]
impl MarketDataSource for EastMoneyClient {
    async fn daily_series(&self, code: &str, range: &DateRange) -> Result<Vec<DailyBar>> {
        self.fetch_klines(code, range).await
    }

    async fn ticker_info(&self, code: &str) -> Result<TickerInfo> {
        self.fetch_snapshot(code).await
    }

    async fn list_tickers(&self) -> Result<Vec<TickerEntry>> {
        self.fetch_listing().await
    }
}
