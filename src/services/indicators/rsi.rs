//! Relative Strength Index column.

/// Trailing RSI over `period` close-to-close deltas.
///
/// Average gain and loss are plain means over the trailing window (no
/// Wilder smoothing). A window with zero losses and positive gains is
/// pinned to 100; a flat window (both averages zero) is undefined, as is
/// the initial window.
pub fn rsi(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() <= period {
        return out;
    }

    for i in period..values.len() {
        let mut gain = 0.0;
        let mut loss = 0.0;
        for j in (i - period + 1)..=i {
            let delta = values[j] - values[j - 1];
            if delta > 0.0 {
                gain += delta;
            } else {
                loss -= delta;
            }
        }

        let avg_gain = gain / period as f64;
        let avg_loss = loss / period as f64;

        out[i] = if avg_loss == 0.0 {
            if avg_gain == 0.0 {
                None
            } else {
                Some(100.0)
            }
        } else {
            let rs = avg_gain / avg_loss;
            Some(100.0 - 100.0 / (1.0 + rs))
        };
    }

    out
}
