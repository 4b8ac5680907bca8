//! Tag-overlap candidate search.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::persona::Persona;

/// How the matcher keeps a target from ending up in its own result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfExclusion {
    /// Exclude any candidate whose overlap equals the target's full
    /// tag-set size. Suppresses self-matches as a side effect, along with
    /// every other exact-overlap candidate.
    FullOverlap,
    /// Skip the target row itself (by table index) and admit full-overlap
    /// candidates.
    Identity,
}

/// Matcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum number of shared tags for a candidate to qualify.
    pub min_shared_tags: usize,
    /// Self-exclusion policy.
    pub self_exclusion: SelfExclusion,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_shared_tags: 2,
            self_exclusion: SelfExclusion::FullOverlap,
        }
    }
}

/// One qualifying persona: identity plus overlap strength.
///
/// Transient: produced while evaluating a single target and consumed by
/// rank-and-select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Candidate's display name.
    pub name: String,
    /// Candidate's handle.
    pub handle: String,
    /// Number of distinct tags shared with the target.
    pub shared_tags: usize,
}

/// Find every persona sharing enough tags with the target at
/// `target_index`, in table order.
///
/// Overlap is counted over distinct tags. Under
/// [`SelfExclusion::FullOverlap`] every returned candidate satisfies
/// `min_shared_tags <= shared_tags < |target tags|`; under
/// [`SelfExclusion::Identity`] the upper bound is dropped and the target
/// row is skipped instead. A target with no tags, or an out-of-range
/// index, yields no candidates.
pub fn find_candidates(
    personas: &[Persona],
    target_index: usize,
    config: &MatchConfig,
) -> Vec<MatchCandidate> {
    let target = match personas.get(target_index) {
        Some(persona) => persona,
        None => return Vec::new(),
    };

    let target_tags: HashSet<&str> = target.matching_tags().iter().map(String::as_str).collect();
    if target_tags.is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for (index, candidate) in personas.iter().enumerate() {
        if config.self_exclusion == SelfExclusion::Identity && index == target_index {
            continue;
        }

        let candidate_tags: HashSet<&str> =
            candidate.matching_tags().iter().map(String::as_str).collect();
        let shared = candidate_tags.intersection(&target_tags).count();

        if shared < config.min_shared_tags {
            continue;
        }
        if config.self_exclusion == SelfExclusion::FullOverlap && shared >= target_tags.len() {
            continue;
        }

        candidates.push(MatchCandidate {
            name: candidate.name.clone(),
            handle: candidate.handle.clone(),
            shared_tags: shared,
        });
    }

    log::debug!(
        "matched {} of {} personas against {}",
        candidates.len(),
        personas.len(),
        target.handle,
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona(name: &str, tags: &str) -> Persona {
        Persona::from_raw(name, &format!("@{}", name), "1000", Some(tags), None).unwrap()
    }

    #[test]
    fn test_overlap_window() {
        // B shares 2 of A's 3 tags and qualifies; C matches all 3 and is
        // excluded under the default policy.
        let personas = vec![
            persona("A", "male, young, urban"),
            persona("B", "male, young"),
            persona("C", "male, young, urban"),
        ];
        let found = find_candidates(&personas, 0, &MatchConfig::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "B");
        assert_eq!(found[0].shared_tags, 2);
    }

    #[test]
    fn test_identity_policy_admits_full_overlap() {
        let personas = vec![
            persona("A", "male, young, urban"),
            persona("C", "male, young, urban"),
        ];
        let config = MatchConfig {
            self_exclusion: SelfExclusion::Identity,
            ..MatchConfig::default()
        };
        let found = find_candidates(&personas, 0, &config);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "C");
        assert_eq!(found[0].shared_tags, 3);

        // The target row itself never appears.
        assert!(found.iter().all(|c| c.name != "A"));
    }

    #[test]
    fn test_full_overlap_policy_suppresses_self() {
        // Under the default policy the target matches its own row with
        // full overlap, which the upper bound rejects.
        let personas = vec![persona("A", "male, young")];
        let found = find_candidates(&personas, 0, &MatchConfig::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_bounds_hold_for_all_candidates() {
        let personas = vec![
            persona("A", "a, b, c, d"),
            persona("B", "a, b"),
            persona("C", "a, b, c"),
            persona("D", "a"),
            persona("E", "a, b, c, d"),
            persona("F", "x, y"),
        ];
        let config = MatchConfig::default();
        let found = find_candidates(&personas, 0, &config);
        let target_size = personas[0].tags.len();
        assert!(!found.is_empty());
        for candidate in &found {
            assert!(candidate.shared_tags >= config.min_shared_tags);
            assert!(candidate.shared_tags < target_size);
        }
    }

    #[test]
    fn test_idempotent() {
        let personas = vec![
            persona("A", "a, b, c"),
            persona("B", "a, b"),
            persona("C", "b, c"),
        ];
        let config = MatchConfig::default();
        assert_eq!(
            find_candidates(&personas, 0, &config),
            find_candidates(&personas, 0, &config),
        );
    }

    #[test]
    fn test_threshold_at_tag_set_size_matches_nothing() {
        // min_shared_tags == |target tags|: no candidate can satisfy both
        // bounds under the default policy.
        let personas = vec![
            persona("A", "a, b"),
            persona("B", "a, b"),
            persona("C", "a, b, c"),
        ];
        let config = MatchConfig {
            min_shared_tags: 2,
            self_exclusion: SelfExclusion::FullOverlap,
        };
        assert!(find_candidates(&personas, 0, &config).is_empty());
    }

    #[test]
    fn test_empty_collection_and_bad_index() {
        let personas: Vec<Persona> = Vec::new();
        assert!(find_candidates(&personas, 0, &MatchConfig::default()).is_empty());

        let personas = vec![persona("A", "a, b")];
        assert!(find_candidates(&personas, 5, &MatchConfig::default()).is_empty());
    }

    #[test]
    fn test_untagged_target_matches_nothing() {
        let personas = vec![
            Persona::from_raw("A", "@A", "1000", None, None).unwrap(),
            persona("B", "a, b"),
        ];
        assert!(find_candidates(&personas, 0, &MatchConfig::default()).is_empty());
    }

    #[test]
    fn test_overlap_counts_distinct_tags() {
        // Duplicate tags on a hand-built persona still count once.
        let mut b = persona("B", "male, young");
        b.tags.push("male".to_string());
        let personas = vec![persona("A", "male, young, urban"), b];
        let found = find_candidates(&personas, 0, &MatchConfig::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].shared_tags, 2);
    }
}
