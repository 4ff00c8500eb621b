//! MACD and signal line columns.

/// Exponential moving average with `alpha = 2 / (span + 1)`.
///
/// Seeded from the first value: `ema[0] = values[0]`, then
/// `ema[i] = values[i] * alpha + ema[i-1] * (1 - alpha)`. Defined for
/// every position.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let Some(&first) = values.first() else {
        return out;
    };

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut prev = first;
    out.push(prev);

    for &value in &values[1..] {
        prev = value * alpha + prev * (1.0 - alpha);
        out.push(prev);
    }

    out
}

/// MACD line (EMA(fast) - EMA(slow)) and its signal line (EMA of MACD).
pub fn macd_lines(
    values: &[f64],
    fast: usize,
    slow: usize,
    signal_span: usize,
) -> (Vec<f64>, Vec<f64>) {
    let fast_ema = ema(values, fast);
    let slow_ema = ema(values, slow);

    let macd: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();

    let signal = ema(&macd, signal_span);
    (macd, signal)
}
