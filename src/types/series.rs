use crate::error::{AppError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of a daily price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
}

/// Inclusive date window, parsed from 8-digit `YYYYMMDD` boundary strings.
///
/// `start <= end` is assumed, not enforced: an inverted window simply yields
/// an empty series downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Parse a window from two `YYYYMMDD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: parse_compact_date(start)?,
            end: parse_compact_date(end)?,
        })
    }

    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Iterate every calendar day in the window, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    /// Start date in the provider's compact `YYYYMMDD` form.
    pub fn start_compact(&self) -> String {
        self.start.format("%Y%m%d").to_string()
    }

    /// End date in the provider's compact `YYYYMMDD` form.
    pub fn end_compact(&self) -> String {
        self.end.format("%Y%m%d").to_string()
    }
}

fn parse_compact_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .map_err(|_| AppError::BadRequest(format!("invalid date '{}', expected YYYYMMDD", s)))
}
