//! The follower-matching core.
//!
//! Four pure components (tag vocabulary extraction, follower-count
//! probability bands, tag-overlap matching, and rank-and-select) plus
//! the pipeline that composes them into "compute likely followers for
//! persona P" and the whole-table follow computation.
//!
//! Everything here is a synchronous, side-effect-free transform over
//! in-memory collections; inputs arrive as arguments, never through
//! ambient state.

pub mod bands;
pub mod matcher;
pub mod select;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

use crate::persona::Persona;
use crate::utilities::errors::InputError;

pub use bands::selection_probability;
pub use matcher::{find_candidates, MatchCandidate, MatchConfig, SelfExclusion};
pub use select::{rank_and_select, LikelyFollower};
pub use vocabulary::{persona_vocabulary, split_tags, tag_vocabulary};

/// One exported follow relation: who likely follows whom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowRow {
    /// Follower's display name.
    pub follower_name: String,
    /// Follower's handle.
    pub follower_handle: String,
    /// Display name of the followed persona.
    pub followed_name: String,
}

/// Likely followers of the persona at `target_index`.
///
/// Composes the band probability for the target's audience size, the
/// overlap matcher, and rank-and-select. An out-of-range index yields an
/// empty result.
///
/// # Errors
/// Returns `InputError::InvalidInput` if the target carries a negative
/// follower count.
pub fn likely_followers(
    personas: &[Persona],
    target_index: usize,
    config: &MatchConfig,
) -> Result<Vec<LikelyFollower>, InputError> {
    let target = match personas.get(target_index) {
        Some(persona) => persona,
        None => return Ok(Vec::new()),
    };
    let probability = bands::selection_probability(target.follower_count)?;
    let candidates = matcher::find_candidates(personas, target_index, config);
    Ok(select::rank_and_select(candidates, probability))
}

/// Run the likely-follower computation for every persona, in table order,
/// and flatten the results into follow rows.
///
/// Rows are grouped by followed persona, in table order. Personas whose
/// tag set is too small to produce candidates contribute no rows.
pub fn build_follow_table(
    personas: &[Persona],
    config: &MatchConfig,
) -> Result<Vec<FollowRow>, InputError> {
    let mut rows = Vec::new();
    for (index, target) in personas.iter().enumerate() {
        let selected = likely_followers(personas, index, config)?;
        log::debug!("{} likely followers for {}", selected.len(), target.handle);
        for follower in selected {
            rows.push(FollowRow {
                follower_name: follower.name,
                follower_handle: follower.handle,
                followed_name: target.name.clone(),
            });
        }
    }
    Ok(rows)
}
