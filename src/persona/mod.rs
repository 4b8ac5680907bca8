//! Persona records and boundary validation.
//!
//! A persona is one row of the input table: identity fields, an audience
//! size, and a set of descriptive tags. Free-text table fields are
//! normalized here, once, so the matching core only ever sees typed values.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matching::vocabulary::split_tags;
use crate::utilities::errors::InputError;

static DIGIT_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,_\s]").unwrap());

/// A social-media persona profile.
///
/// Tags are trimmed, empty tokens dropped, and duplicates removed keeping
/// first-seen order; matching treats them as a set. `follower_tags` holds a
/// previously computed "Follower Tags" column, which takes precedence over
/// `tags` when matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    /// Display name of the persona.
    pub name: String,
    /// Account handle.
    pub handle: String,
    /// Audience size. Non-negative; validated at construction.
    pub follower_count: i64,
    /// Descriptive tags (demographics, interests).
    pub tags: Vec<String>,
    /// Optional hand-edited or previously computed follower tag set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follower_tags: Option<Vec<String>>,
}

impl Persona {
    /// Build a persona from raw table fields, normalizing as it goes.
    ///
    /// # Arguments
    /// * `name` - Display name field.
    /// * `handle` - Handle field.
    /// * `followers_raw` - Free-text follower count (may carry thousands
    ///   separators).
    /// * `tags_raw` - Comma-separated tag field, absent for an empty cell.
    /// * `follower_tags_raw` - Optional "Follower Tags" field.
    ///
    /// # Errors
    /// Returns `InputError::InvalidInput` when the follower count is not a
    /// non-negative integer. A missing tag field is an empty tag set, not
    /// an error.
    pub fn from_raw(
        name: &str,
        handle: &str,
        followers_raw: &str,
        tags_raw: Option<&str>,
        follower_tags_raw: Option<&str>,
    ) -> Result<Self, InputError> {
        let follower_count = parse_follower_count(followers_raw)?;
        Ok(Self {
            name: name.trim().to_string(),
            handle: handle.trim().to_string(),
            follower_count,
            tags: tags_raw.map(split_tags).unwrap_or_default(),
            follower_tags: follower_tags_raw.map(split_tags),
        })
    }

    /// The tag set used for follower matching: the hand-edited follower
    /// tags when present, the original tags otherwise.
    pub fn matching_tags(&self) -> &[String] {
        match &self.follower_tags {
            Some(tags) => tags,
            None => &self.tags,
        }
    }
}

/// Parse a free-text follower count.
///
/// Accepts surrounding whitespace and `,`/`_` thousands separators.
/// Anything non-numeric or negative fails with `InvalidInput`; the count
/// is never silently defaulted.
pub fn parse_follower_count(raw: &str) -> Result<i64, InputError> {
    let cleaned = DIGIT_SEPARATORS.replace_all(raw.trim(), "");
    let count: i64 = cleaned.parse().map_err(|_| InputError::InvalidInput {
        message: format!("follower count is not numeric: {:?}", raw),
    })?;
    if count < 0 {
        return Err(InputError::InvalidInput {
            message: format!("follower count is negative: {}", count),
        });
    }
    Ok(count)
}
