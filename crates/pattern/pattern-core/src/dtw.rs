//! Dynamic time warping.

/// DTW distance with absolute-difference cost.
///
/// `band` is a Sakoe-Chiba half-width: row `i` only visits columns
/// `max(1, i - w)..=min(m, i + w)`. `Some(0)` is diagonal-only and `None`
/// is unconstrained. Returns `f64::INFINITY` when the band cannot reach
/// the final cell, which happens when the lengths differ by more than `w`.
///
/// Keeps two rows of the `(n + 1) x (m + 1)` cost matrix.
pub fn dtw_distance(seq1: &[f64], seq2: &[f64], band: Option<usize>) -> f64 {
    let (n, m) = (seq1.len(), seq2.len());
    let mut prev = vec![f64::INFINITY; m + 1];
    let mut curr = vec![f64::INFINITY; m + 1];
    prev[0] = 0.0;

    for i in 1..=n {
        curr.fill(f64::INFINITY);
        let (lo, hi) = match band {
            Some(w) => (i.saturating_sub(w).max(1), (i + w).min(m)),
            None => (1, m),
        };
        for j in lo..=hi {
            let cost = (seq1[i - 1] - seq2[j - 1]).abs();
            curr[j] = cost + prev[j].min(curr[j - 1]).min(prev[j - 1]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// `max(0, 1 - distance / (2 * window))`.
///
/// Non-finite distances and empty windows map to 0.
pub fn similarity(distance: f64, window: usize) -> f64 {
    if window == 0 || !distance.is_finite() {
        return 0.0;
    }
    (1.0 - distance / (2.0 * window as f64)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_distance_is_zero() {
        let seq = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(dtw_distance(&seq, &seq, None), 0.0);
        assert_eq!(dtw_distance(&seq, &seq, Some(0)), 0.0);
        assert_eq!(dtw_distance(&seq, &seq, Some(2)), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = [0.0, 0.3, 0.9, 1.0, 0.4, 0.1];
        let b = [0.1, 0.2, 0.5, 1.0, 0.8, 0.0, 0.2];
        for band in [None, Some(1), Some(2), Some(5)] {
            assert_eq!(dtw_distance(&a, &b, band), dtw_distance(&b, &a, band));
        }
    }

    #[test]
    fn test_warping_absorbs_stretch() {
        let short = [0.0, 1.0, 2.0, 3.0, 4.0];
        let long = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0];
        let d = dtw_distance(&short, &long, None);
        assert!(d > 0.0 && d < 5.0);
    }

    #[test]
    fn test_constant_offset() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [1.1, 2.1, 3.1, 4.1, 5.1];
        assert!(dtw_distance(&a, &b, None) < 1.0);
    }

    #[test]
    fn test_band_too_narrow_is_infinite() {
        let a = [0.0, 1.0];
        let b = [0.0, 0.5, 1.0, 1.0, 1.0];
        assert!(dtw_distance(&a, &b, Some(1)).is_infinite());
        assert!(dtw_distance(&a, &b, Some(3)).is_finite());
    }

    #[test]
    fn test_empty_sequences() {
        assert_eq!(dtw_distance(&[], &[], None), 0.0);
        assert!(dtw_distance(&[], &[1.0], None).is_infinite());
    }

    #[test]
    fn test_similarity_monotone_in_distance() {
        let window = 20;
        let mut last = similarity(0.0, window);
        assert_eq!(last, 1.0);
        for step in 1..100 {
            let s = similarity(step as f64 * 0.5, window);
            assert!(s <= last);
            assert!((0.0..=1.0).contains(&s));
            last = s;
        }
        assert_eq!(similarity(40.0, window), 0.0);
        assert_eq!(similarity(f64::INFINITY, window), 0.0);
    }
}
