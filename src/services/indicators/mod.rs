//! Technical indicator computation over a daily series.

pub mod macd;
pub mod rsi;
pub mod sma;

pub use macd::{ema, macd_lines};
pub use rsi::rsi;
pub use sma::sma;

use crate::types::{DailyBar, IndicatorSet, TickerInfo};
use std::collections::BTreeMap;
use tracing::debug;

/// Compute every indicator column for a daily series.
///
/// Pure and total: a short or empty series degrades to undefined column
/// entries, never an error. Downstream treats undefined as "insufficient
/// data".
pub fn compute_technical_indicators(bars: &[DailyBar]) -> IndicatorSet {
    if bars.is_empty() {
        debug!("empty series, indicator columns left empty");
        return IndicatorSet::empty();
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let (macd, signal) = macd_lines(&closes, 12, 26, 9);

    IndicatorSet {
        ma5: sma(&closes, 5),
        ma10: sma(&closes, 10),
        ma20: sma(&closes, 20),
        rsi14: rsi(&closes, 14),
        macd,
        signal,
    }
}

/// Derive fundamental indicators from a ticker's info record.
///
/// Interface point only; nothing is derived today.
pub fn fundamental_indicators(_info: &TickerInfo) -> BTreeMap<String, f64> {
    BTreeMap::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bars(closes: &[f64]) -> Vec<DailyBar> {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| DailyBar {
                date: start + chrono::Days::new(i as u64),
                open: close,
                close,
                high: close + 0.5,
                low: close - 0.5,
                volume: 1_500_000,
            })
            .collect()
    }

    #[test]
    fn test_columns_aligned_with_rows() {
        let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64 * 0.3).collect();
        let series = bars(&closes);
        let set = compute_technical_indicators(&series);
        assert!(set.is_aligned(series.len()));
    }

    #[test]
    fn test_leading_ma_undefined() {
        let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        let set = compute_technical_indicators(&bars(&closes));
        assert!(set.ma5[..4].iter().all(|v| v.is_none()));
        assert!(set.ma5[4].is_some());
        assert!(set.ma10[..9].iter().all(|v| v.is_none()));
        assert!(set.ma20[..19].iter().all(|v| v.is_none()));
        assert!(set.ma20[19].is_some());
    }

    #[test]
    fn test_empty_series() {
        let set = compute_technical_indicators(&[]);
        assert!(set.is_aligned(0));
    }

    #[test]
    fn test_fundamental_indicators_empty() {
        let info = TickerInfo {
            code: "000001".to_string(),
            name: "平安银行".to_string(),
            industry: "银行".to_string(),
            pe_ratio: Some(8.5),
            pb_ratio: Some(0.8),
            total_market_cap: None,
            float_market_cap: None,
            week52_high: None,
            week52_low: None,
            eps: None,
        };
        assert!(fundamental_indicators(&info).is_empty());
    }
}
