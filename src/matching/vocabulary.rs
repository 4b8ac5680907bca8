//! Tag splitting and vocabulary extraction.

use std::collections::BTreeSet;

use crate::persona::Persona;

/// Split a raw comma-separated tag field into normalized tokens.
///
/// Tokens are trimmed of surrounding whitespace; empty tokens are dropped;
/// duplicates are removed keeping first-seen order. Comparison is
/// case-sensitive.
pub fn split_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if !tags.iter().any(|t| t == token) {
            tags.push(token.to_string());
        }
    }
    tags
}

/// Collect the sorted set of distinct tags across raw tag fields.
///
/// Absent fields (`None`) contribute nothing. The result is sorted by the
/// total byte-wise order on strings, so identical input always yields an
/// identical vocabulary.
pub fn tag_vocabulary<'a, I>(raw_fields: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut distinct: BTreeSet<String> = BTreeSet::new();
    for field in raw_fields {
        if let Some(raw) = field {
            distinct.extend(split_tags(raw));
        }
    }
    distinct.into_iter().collect()
}

/// The vocabulary over a persona table, using each persona's matching tag
/// set (hand-edited follower tags when present).
pub fn persona_vocabulary(personas: &[Persona]) -> Vec<String> {
    let mut distinct: BTreeSet<String> = BTreeSet::new();
    for persona in personas {
        distinct.extend(persona.matching_tags().iter().cloned());
    }
    distinct.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags_trims_and_dedups() {
        let tags = split_tags(" male,young ,  urban, male,");
        assert_eq!(tags, vec!["male", "young", "urban"]);
    }

    #[test]
    fn test_split_tags_drops_empty_tokens() {
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ,,  ").is_empty());
    }

    #[test]
    fn test_split_tags_is_case_sensitive() {
        let tags = split_tags("Male, male");
        assert_eq!(tags, vec!["Male", "male"]);
    }

    #[test]
    fn test_vocabulary_sorted_and_distinct() {
        let vocab = tag_vocabulary(vec![
            Some("young, male"),
            None,
            Some("urban, male"),
            Some(" , "),
        ]);
        assert_eq!(vocab, vec!["male", "urban", "young"]);
    }

    #[test]
    fn test_vocabulary_deterministic() {
        let fields = vec![Some("b, a"), Some("c, a")];
        assert_eq!(
            tag_vocabulary(fields.clone()),
            tag_vocabulary(fields),
        );
    }

    #[test]
    fn test_persona_vocabulary_uses_matching_tags() {
        let mut p = crate::persona::Persona::from_raw("A", "@a", "10", Some("x, y"), None).unwrap();
        let q = crate::persona::Persona::from_raw("B", "@b", "10", Some("z"), None).unwrap();
        p.follower_tags = Some(vec!["male".to_string()]);
        assert_eq!(persona_vocabulary(&[p, q]), vec!["male", "z"]);
    }
}
