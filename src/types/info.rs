use serde::{Deserialize, Serialize};

/// Static descriptive record for a single ticker. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerInfo {
    pub code: String,
    pub name: String,
    pub industry: String,
    /// Price/earnings ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,
    /// Price/book ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pb_ratio: Option<f64>,
    /// Total market capitalization, in yuan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_market_cap: Option<f64>,
    /// Free-float market capitalization, in yuan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float_market_cap: Option<f64>,
    /// 52-week high price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week52_high: Option<f64>,
    /// 52-week low price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week52_low: Option<f64>,
    /// Earnings per share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eps: Option<f64>,
}

/// One entry of a ticker listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerEntry {
    pub code: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_info_skips_absent_fields() {
        let info = TickerInfo {
            code: "000001".to_string(),
            name: "平安银行".to_string(),
            industry: "银行".to_string(),
            pe_ratio: Some(8.5),
            pb_ratio: None,
            total_market_cap: None,
            float_market_cap: None,
            week52_high: None,
            week52_low: None,
            eps: None,
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"peRatio\":8.5"));
        assert!(!json.contains("pbRatio"));
    }

    #[test]
    fn test_ticker_entry_equality() {
        let a = TickerEntry {
            code: "600000".to_string(),
            name: "浦发银行".to_string(),
        };
        assert_eq!(a, a.clone());
    }
}
