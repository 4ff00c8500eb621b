//! Series classification and recommendation.

use crate::services::indicators::{compute_technical_indicators, fundamental_indicators};
use crate::services::MarketDataService;
use crate::types::{
    AnalysisResult, DailyBar, DataOrigin, DateRange, EnrichedSeries, IndicatorSet, Momentum,
    Recommendation, Trend, Volatility,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Volatility thresholds on the standard deviation of daily fractional
/// returns.
const VOLATILITY_HIGH: f64 = 0.02;
const VOLATILITY_MEDIUM: f64 = 0.01;

/// Classify the trend from the most recent MA5 vs MA20.
///
/// Undefined when either average is still inside its initial window.
pub fn classify_trend(indicators: &IndicatorSet) -> Option<Trend> {
    let ma5 = indicators.ma5.last().copied().flatten()?;
    let ma20 = indicators.ma20.last().copied().flatten()?;

    Some(if ma5 > ma20 {
        Trend::Up
    } else if ma5 < ma20 {
        Trend::Down
    } else {
        Trend::Sideways
    })
}

/// Classify momentum from the most recent RSI.
pub fn classify_momentum(indicators: &IndicatorSet) -> Option<Momentum> {
    let rsi = indicators.rsi14.last().copied().flatten()?;

    Some(if rsi > 70.0 {
        Momentum::Overbought
    } else if rsi < 30.0 {
        Momentum::Oversold
    } else {
        Momentum::Neutral
    })
}

/// Classify volatility from the sample standard deviation of day-over-day
/// fractional close changes over the whole window.
pub fn classify_volatility(bars: &[DailyBar]) -> Option<Volatility> {
    let returns: Vec<f64> = bars
        .windows(2)
        .filter(|pair| pair[0].close != 0.0)
        .map(|pair| (pair[1].close - pair[0].close) / pair[0].close)
        .collect();

    if returns.len() < 2 {
        return None;
    }

    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>()
        / (returns.len() - 1) as f64;
    let sd = variance.sqrt();

    Some(if sd > VOLATILITY_HIGH {
        Volatility::High
    } else if sd > VOLATILITY_MEDIUM {
        Volatility::Medium
    } else {
        Volatility::Low
    })
}

type RulePredicate = fn(Option<Trend>, Option<Momentum>) -> bool;

/// Ordered recommendation rules, evaluated top to bottom; first match wins.
/// The final catch-all is the default outcome.
pub static RECOMMENDATION_RULES: &[(RulePredicate, Recommendation)] = &[
    (
        |t, m| t == Some(Trend::Up) && m == Some(Momentum::Overbought),
        Recommendation::Watch,
    ),
    (
        |t, m| t == Some(Trend::Down) && m == Some(Momentum::Oversold),
        Recommendation::ConsiderBuying,
    ),
    (
        |t, m| t == Some(Trend::Up) && m == Some(Momentum::Neutral),
        Recommendation::ConsiderHolding,
    ),
    (|_, _| true, Recommendation::Watch),
];

/// Map a classification pair to a recommendation via the rule table.
pub fn recommend(trend: Option<Trend>, momentum: Option<Momentum>) -> Recommendation {
    for (applies, outcome) in RECOMMENDATION_RULES {
        if applies(trend, momentum) {
            return *outcome;
        }
    }
    Recommendation::Watch
}

/// The analysis pipeline: fetch, enrich, classify, recommend.
pub struct StockAnalyzer {
    market: Arc<MarketDataService>,
}

impl StockAnalyzer {
    pub fn new(market: Arc<MarketDataService>) -> Arc<Self> {
        Arc::new(Self { market })
    }

    /// Analyze one ticker over a date window.
    ///
    /// Returns `None` when no usable result can be produced; the caller
    /// shows a generic failure message in that case.
    pub async fn analyze(&self, code: &str, range: &DateRange) -> Option<AnalysisResult> {
        let (bars, origin) = self.market.daily_series(code, range).await;
        if bars.is_empty() {
            warn!("no rows in window for {}, analysis unavailable", code);
            return None;
        }

        let (info, _) = self.market.ticker_info(code).await;

        let indicators = compute_technical_indicators(&bars);
        let fundamentals = fundamental_indicators(&info);

        let trend = classify_trend(&indicators);
        let momentum = classify_momentum(&indicators);
        let volatility = classify_volatility(&bars);
        let recommendation = recommend(trend, momentum);

        debug!(
            "analyzed {}: trend={:?} momentum={:?} volatility={:?} -> {:?}",
            code, trend, momentum, volatility, recommendation
        );

        Some(AnalysisResult {
            code: code.to_string(),
            trend,
            momentum,
            volatility,
            fundamentals,
            recommendation,
            recommendation_text: recommendation.text().to_string(),
            origin,
        })
    }

    /// The daily series with its indicator columns, for chart-style use.
    pub async fn enriched_series(
        &self,
        code: &str,
        range: &DateRange,
    ) -> (EnrichedSeries, DataOrigin) {
        let (bars, origin) = self.market.daily_series(code, range).await;
        let indicators = compute_technical_indicators(&bars);
        (EnrichedSeries { bars, indicators }, origin)
    }
}
