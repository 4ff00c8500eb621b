use crate::types::DailyBar;
use serde::{Deserialize, Serialize};

/// Derived indicator columns, aligned 1:1 with the rows of the series they
/// were computed from.
///
/// Moving averages and RSI hold `None` wherever their trailing window is
/// incomplete; every value at position `i` depends only on rows `<= i`.
/// MACD and its signal line are defined from the first row by the EMA
/// recurrence `ema[0] = price[0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSet {
    /// 5-period simple moving average of close.
    pub ma5: Vec<Option<f64>>,
    /// 10-period simple moving average of close.
    pub ma10: Vec<Option<f64>>,
    /// 20-period simple moving average of close.
    pub ma20: Vec<Option<f64>>,
    /// 14-period RSI of close.
    pub rsi14: Vec<Option<f64>>,
    /// EMA(12) - EMA(26) of close.
    pub macd: Vec<f64>,
    /// EMA(9) of the MACD line.
    pub signal: Vec<f64>,
}

impl IndicatorSet {
    /// Columns for an empty series.
    pub fn empty() -> Self {
        Self {
            ma5: Vec::new(),
            ma10: Vec::new(),
            ma20: Vec::new(),
            rsi14: Vec::new(),
            macd: Vec::new(),
            signal: Vec::new(),
        }
    }

    /// Whether every column has exactly `rows` entries.
    pub fn is_aligned(&self, rows: usize) -> bool {
        self.ma5.len() == rows
            && self.ma10.len() == rows
            && self.ma20.len() == rows
            && self.rsi14.len() == rows
            && self.macd.len() == rows
            && self.signal.len() == rows
    }
}

/// A daily series together with its derived indicator columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSeries {
    pub bars: Vec<DailyBar>,
    pub indicators: IndicatorSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_aligned_with_zero_rows() {
        let set = IndicatorSet::empty();
        assert!(set.is_aligned(0));
        assert!(!set.is_aligned(1));
    }

    #[test]
    fn test_undefined_serializes_as_null() {
        let set = IndicatorSet {
            ma5: vec![None, Some(10.0)],
            ma10: vec![None, None],
            ma20: vec![None, None],
            rsi14: vec![None, None],
            macd: vec![0.0, 0.1],
            signal: vec![0.0, 0.02],
        };
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"ma5\":[null,10.0]"));
    }
}
