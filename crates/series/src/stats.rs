//! Descriptive statistics over slices.

/// Standard deviations below this are treated as a constant window.
pub const STD_EPSILON: f64 = 1e-10;

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation (divides by `n`). Returns 0.0 for an empty slice.
pub fn std_dev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    let variance = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64;
    variance.sqrt()
}

/// Z-score of one point against the window that precedes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingZScore {
    /// Position of the scored point in the input slice.
    pub index: usize,
    /// The scored value.
    pub value: f64,
    /// `(value - mean) / std`.
    pub z: f64,
    /// Mean of the trailing window.
    pub mean: f64,
    /// Population std of the trailing window.
    pub std: f64,
}

impl RollingZScore {
    /// `mean ± 2σ` of the trailing window.
    pub fn expected_range(&self) -> (f64, f64) {
        (self.mean - 2.0 * self.std, self.mean + 2.0 * self.std)
    }
}

/// Score every point `i >= lookback` against the window `[i - lookback, i)`.
///
/// The scored point is never part of its own window. Points whose window
/// std falls below `epsilon` are skipped. A `lookback` of zero yields nothing.
pub fn rolling_zscores(values: &[f64], lookback: usize, epsilon: f64) -> Vec<RollingZScore> {
    if lookback == 0 || values.len() <= lookback {
        return Vec::new();
    }

    (lookback..values.len())
        .filter_map(|i| {
            let window = &values[i - lookback..i];
            let m = mean(window);
            let s = std_dev(window);
            if s < epsilon {
                return None;
            }
            Some(RollingZScore {
                index: i,
                value: values[i],
                z: (values[i] - m) / s,
                mean: m,
                std: s,
            })
        })
        .collect()
}
