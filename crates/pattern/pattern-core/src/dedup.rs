//! Overlap deduplication.

use pattern_spi::PatternMatch;

/// Keep one representative match per region.
///
/// Candidates are visited best similarity first (ties keep their input
/// order). A candidate is rejected when it shares more than
/// `max_overlap` of its own span with any match already kept.
pub fn deduplicate(mut matches: Vec<PatternMatch>, max_overlap: f64) -> Vec<PatternMatch> {
    matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    let mut kept: Vec<PatternMatch> = Vec::with_capacity(matches.len());
    for candidate in matches {
        let span = candidate.span().max(1) as f64;
        let clashes = kept
            .iter()
            .any(|k| candidate.overlap(k) as f64 / span > max_overlap);
        if !clashes {
            kept.push(candidate);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use pattern_spi::{Outcome, PatternKind};

    fn candidate(kind: PatternKind, similarity: f64, start: usize, end: usize) -> PatternMatch {
        PatternMatch {
            kind,
            pattern_name: kind.to_string(),
            similarity,
            start,
            end,
            dtw_distance: 0.0,
            description: String::new(),
            expected_outcome: Outcome::Neutral,
        }
    }

    #[test]
    fn test_keeps_best_of_overlapping_and_all_disjoint() {
        let matches = vec![
            candidate(PatternKind::DoubleBottom, 0.8, 0, 20),
            candidate(PatternKind::DoubleBottom, 0.7, 5, 25),
            candidate(PatternKind::DoubleTop, 0.9, 30, 50),
        ];
        let kept = deduplicate(matches, 0.5);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].similarity, 0.9);
        assert_eq!(kept[1].similarity, 0.8);
        assert_eq!(kept[1].start, 0);
    }

    #[test]
    fn test_exactly_half_overlap_is_kept() {
        let matches = vec![
            candidate(PatternKind::DoubleBottom, 0.9, 0, 20),
            candidate(PatternKind::DoubleTop, 0.8, 10, 30),
        ];
        assert_eq!(deduplicate(matches, 0.5).len(), 2);
    }

    #[test]
    fn test_overlap_measured_against_own_span() {
        // The short match sits entirely inside the long one.
        let matches = vec![
            candidate(PatternKind::CupAndHandle, 0.9, 0, 50),
            candidate(PatternKind::DoubleBottom, 0.8, 10, 25),
        ];
        let kept = deduplicate(matches, 0.5);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].kind, PatternKind::CupAndHandle);
    }

    #[test]
    fn test_empty() {
        assert!(deduplicate(Vec::new(), 0.5).is_empty());
    }
}
