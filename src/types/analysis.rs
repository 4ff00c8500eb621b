use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where a fetched data set actually came from.
///
/// The live provider is substituted with generated placeholder data on any
/// failure; the substitution is observable through this marker instead of
/// being hidden behind the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    Live,
    Synthetic,
}

/// Trend classification from the most recent MA5 vs MA20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Sideways,
}

/// Momentum classification from the most recent RSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Momentum {
    Overbought,
    Oversold,
    Neutral,
}

/// Volatility classification from the standard deviation of daily returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Volatility {
    High,
    Medium,
    Low,
}

/// The canned recommendation outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Watch,
    ConsiderBuying,
    ConsiderHolding,
}

impl Recommendation {
    /// Display text shown to the user.
    pub fn text(&self) -> &'static str {
        match self {
            Recommendation::Watch => "watch / stay out",
            Recommendation::ConsiderBuying => "consider buying",
            Recommendation::ConsiderHolding => "consider holding",
        }
    }
}

/// Result of one analysis call. Created fresh per call, never mutated.
///
/// Classifications are `None` when the window is too short to define them;
/// an undefined trend or momentum never matches a recommendation rule, so
/// the default outcome fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub code: String,
    pub trend: Option<Trend>,
    pub momentum: Option<Momentum>,
    pub volatility: Option<Volatility>,
    /// Fundamental indicators. Intentionally empty today; the interface
    /// point is kept for when the basic-info record grows a real use.
    pub fundamentals: BTreeMap<String, f64>,
    pub recommendation: Recommendation,
    pub recommendation_text: String,
    pub origin: DataOrigin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_text() {
        assert_eq!(Recommendation::Watch.text(), "watch / stay out");
        assert_eq!(Recommendation::ConsiderBuying.text(), "consider buying");
        assert_eq!(Recommendation::ConsiderHolding.text(), "consider holding");
    }

    #[test]
    fn test_data_origin_serialization() {
        assert_eq!(
            serde_json::to_string(&DataOrigin::Synthetic).unwrap(),
            "\"synthetic\""
        );
        assert_eq!(serde_json::to_string(&DataOrigin::Live).unwrap(), "\"live\"");
    }

    #[test]
    fn test_analysis_result_serialization() {
        let result = AnalysisResult {
            code: "000001".to_string(),
            trend: Some(Trend::Up),
            momentum: None,
            volatility: Some(Volatility::Low),
            fundamentals: BTreeMap::new(),
            recommendation: Recommendation::Watch,
            recommendation_text: Recommendation::Watch.text().to_string(),
            origin: DataOrigin::Live,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"trend\":\"up\""));
        assert!(json.contains("\"momentum\":null"));
        assert!(json.contains("\"recommendationText\":\"watch / stay out\""));
    }
}
