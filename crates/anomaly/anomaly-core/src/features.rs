//! Per-bar feature rows for outlier models.

use series::{gaps, mean, simple_returns, true_range, Bars, STD_EPSILON};

/// Feature rows for bars `1..n`: `[return, volume ratio, true range / prev close, gap]`.
///
/// The volume ratio compares a bar's volume with the mean of up to
/// `lookback` preceding bars (1.0 when that mean is zero). Row `k`
/// describes bar `k + 1`. Misaligned columns are truncated to the
/// shortest one.
pub fn bar_features(bars: &Bars, lookback: usize) -> Vec<Vec<f64>> {
    let n = [
        bars.open.len(),
        bars.high.len(),
        bars.low.len(),
        bars.close.len(),
        bars.volume.len(),
    ]
    .into_iter()
    .min()
    .unwrap_or(0);
    if n < 2 {
        return Vec::new();
    }

    let close = &bars.close[..n];
    let returns = simple_returns(close);
    let tr = true_range(&bars.high[..n], &bars.low[..n], close);
    let gap = gaps(&bars.open[..n], close);

    (1..n)
        .map(|i| {
            let start = i.saturating_sub(lookback.max(1));
            let baseline = mean(&bars.volume[start..i]);
            let volume_ratio = if baseline < STD_EPSILON {
                1.0
            } else {
                bars.volume[i] / baseline
            };
            vec![returns[i - 1], volume_ratio, tr[i - 1] / close[i - 1], gap[i - 1]]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_rows() {
        let bars = Bars::new(
            vec![100.0, 102.0, 101.0],
            vec![101.0, 104.0, 103.0],
            vec![99.0, 101.0, 100.0],
            vec![100.0, 103.0, 102.0],
            vec![1_000.0, 2_000.0, 1_500.0],
        );
        let rows = bar_features(&bars, 10);

        assert_eq!(rows.len(), 2);
        assert!((rows[0][0] - 0.03).abs() < 1e-12);
        assert!((rows[0][1] - 2.0).abs() < 1e-12);
        assert!((rows[0][2] - 0.04).abs() < 1e-12);
        assert!((rows[0][3] - 0.02).abs() < 1e-12);
        assert!((rows[1][1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_too_short() {
        let bars = Bars::new(vec![1.0], vec![1.0], vec![1.0], vec![1.0], vec![1.0]);
        assert!(bar_features(&bars, 5).is_empty());
    }
}
