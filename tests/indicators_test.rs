//! Properties of the indicator columns over a daily series.

use augur::services::indicators::{compute_technical_indicators, ema, rsi, sma};
use augur::types::DailyBar;
use chrono::NaiveDate;

fn bars(closes: &[f64]) -> Vec<DailyBar> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| DailyBar {
            date: start + chrono::Days::new(i as u64),
            open: close - 0.1,
            close,
            high: close + 0.3,
            low: close - 0.3,
            volume: 2_000_000,
        })
        .collect()
}

fn wavy(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + (i as f64 * 0.4).sin() * 3.0 + i as f64 * 0.05)
        .collect()
}

#[test]
fn columns_align_with_rows_and_mark_leading_windows() {
    let series = bars(&wavy(30));
    let set = compute_technical_indicators(&series);

    assert!(set.is_aligned(30));
    assert!(set.ma5[..4].iter().all(|v| v.is_none()));
    assert!(set.ma5[4..].iter().all(|v| v.is_some()));
    assert!(set.ma10[..9].iter().all(|v| v.is_none()));
    assert!(set.ma10[9..].iter().all(|v| v.is_some()));
    assert!(set.ma20[..19].iter().all(|v| v.is_none()));
    assert!(set.ma20[19..].iter().all(|v| v.is_some()));
}

#[test]
fn macd_column_reproduces_ema_difference_bit_for_bit() {
    let closes = wavy(60);
    let set = compute_technical_indicators(&bars(&closes));

    let fast = ema(&closes, 12);
    let slow = ema(&closes, 26);
    for i in 0..closes.len() {
        assert_eq!(set.macd[i], fast[i] - slow[i]);
    }

    let signal = ema(&set.macd, 9);
    assert_eq!(set.signal, signal);
}

#[test]
fn rsi_stays_within_bounds() {
    for closes in [
        wavy(60),
        (0..40).map(|i| 100.0 + i as f64).collect::<Vec<f64>>(),
        (0..40).map(|i| 100.0 - i as f64 * 0.8).collect::<Vec<f64>>(),
    ] {
        for value in rsi(&closes, 14).into_iter().flatten() {
            assert!((0.0..=100.0).contains(&value), "RSI out of bounds: {}", value);
        }
    }
}

#[test]
fn rsi_pins_to_100_when_losses_are_absent() {
    let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64 * 2.0).collect();
    let column = rsi(&closes, 14);
    assert_eq!(column.last().copied().flatten(), Some(100.0));
}

#[test]
fn ma_values_match_plain_means() {
    let closes = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0];
    let column = sma(&closes, 5);
    assert_eq!(column[4], Some(12.0));
    assert_eq!(column[5], Some(13.0));
}

#[test]
fn computation_is_deterministic() {
    let series = bars(&wavy(45));
    let first = compute_technical_indicators(&series);
    let second = compute_technical_indicators(&series);
    assert_eq!(first, second);
}
