//! Ranking and probability-sized selection of match candidates.

use serde::{Deserialize, Serialize};

use crate::matching::matcher::MatchCandidate;

/// A selected likely follower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikelyFollower {
    /// Follower's display name.
    pub name: String,
    /// Follower's handle.
    pub handle: String,
}

/// Order candidates by descending overlap and keep the leading
/// `floor(len * probability)` of them.
///
/// The sort is stable: candidates with equal overlap keep their input
/// order. A probability of 0 yields an empty result; 1.0 keeps the full
/// list.
pub fn rank_and_select(mut candidates: Vec<MatchCandidate>, probability: f64) -> Vec<LikelyFollower> {
    candidates.sort_by(|a, b| b.shared_tags.cmp(&a.shared_tags));

    let keep = (candidates.len() as f64 * probability).floor() as usize;
    candidates.truncate(keep);

    candidates
        .into_iter()
        .map(|candidate| LikelyFollower {
            name: candidate.name,
            handle: candidate.handle,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, shared_tags: usize) -> MatchCandidate {
        MatchCandidate {
            name: name.to_string(),
            handle: format!("@{}", name),
            shared_tags,
        }
    }

    #[test]
    fn test_keeps_floor_of_scaled_length() {
        let candidates: Vec<MatchCandidate> =
            (0..10).map(|i| candidate(&format!("p{}", i), 2)).collect();
        let selected = rank_and_select(candidates, 0.45);
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn test_orders_by_overlap_descending() {
        let candidates = vec![candidate("low", 2), candidate("high", 5), candidate("mid", 3)];
        let selected = rank_and_select(candidates, 1.0);
        let names: Vec<&str> = selected.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let candidates = vec![
            candidate("first", 2),
            candidate("second", 2),
            candidate("third", 2),
        ];
        let selected = rank_and_select(candidates, 1.0);
        let names: Vec<&str> = selected.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_probability_extremes() {
        let candidates = vec![candidate("a", 3), candidate("b", 2)];
        assert!(rank_and_select(candidates.clone(), 0.0).is_empty());
        assert_eq!(rank_and_select(candidates, 1.0).len(), 2);
    }

    #[test]
    fn test_never_exceeds_scaled_length() {
        for len in 0..20 {
            for probability in [0.0, 0.1, 0.3, 0.5, 0.7, 0.9, 1.0] {
                let candidates: Vec<MatchCandidate> =
                    (0..len).map(|i| candidate(&format!("p{}", i), 1)).collect();
                let selected = rank_and_select(candidates, probability);
                let cap = (len as f64 * probability).floor() as usize;
                assert!(selected.len() <= cap);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_and_select(Vec::new(), 0.5).is_empty());
    }
}
