//! Derived series and shape transforms.
//!
//! The derived metric series (`simple_returns`, `true_range`, `gaps`) have
//! length `n - 1`: element `k` describes bar `k + 1` relative to bar `k`.

use crate::stats::STD_EPSILON;

/// `(p[k+1] - p[k]) / p[k]`.
pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
}

/// `max(high - low, |high - prev_close|, |low - prev_close|)` for bars `1..n`.
///
/// Uses the shortest of the three inputs.
pub fn true_range(highs: &[f64], lows: &[f64], closes: &[f64]) -> Vec<f64> {
    let n = highs.len().min(lows.len()).min(closes.len());
    (1..n)
        .map(|i| {
            let prev_close = closes[i - 1];
            (highs[i] - lows[i])
                .max((highs[i] - prev_close).abs())
                .max((lows[i] - prev_close).abs())
        })
        .collect()
}

/// Overnight gap `(open[k+1] - close[k]) / close[k]`.
pub fn gaps(opens: &[f64], closes: &[f64]) -> Vec<f64> {
    let n = opens.len().min(closes.len());
    (1..n)
        .map(|i| (opens[i] - closes[i - 1]) / closes[i - 1])
        .collect()
}

/// Scale to `[0, 1]`. A constant (or empty) input maps to all zeros.
pub fn min_max_normalize(data: &[f64]) -> Vec<f64> {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if data.is_empty() || !(range >= STD_EPSILON) {
        return vec![0.0; data.len()];
    }

    data.iter().map(|x| (x - min) / range).collect()
}

/// Linearly resample `data` to `len` points over a shared `[0, 1]` parameterization.
///
/// Endpoints are preserved. A single-point input is repeated.
pub fn resample_linear(data: &[f64], len: usize) -> Vec<f64> {
    match (data.len(), len) {
        (_, 0) | (0, _) => return Vec::new(),
        (1, _) => return vec![data[0]; len],
        _ => {}
    }
    if len == 1 {
        return vec![data[0]];
    }

    let src_last = data.len() - 1;
    let dst_last = len - 1;

    (0..len)
        .map(|i| {
            // Exact for grid points shared by both parameterizations.
            let pos = (i * src_last) as f64 / dst_last as f64;
            let lo = (pos.floor() as usize).min(src_last);
            let hi = (lo + 1).min(src_last);
            let frac = pos - lo as f64;
            data[lo] + (data[hi] - data[lo]) * frac
        })
        .collect()
}
