//! # followcast
//!
//! Persona demographic tagging and likely-follower estimation.
//!
//! Loads a CSV table of social-media personas, optionally asks a
//! chat-completion endpoint to suggest demographic tags for each persona,
//! and estimates which personas in the table are likely to follow each
//! other: tag-overlap matching, with the kept fraction of ranked
//! candidates sized by the target's follower-count band.

pub mod cli;
pub mod dataset;
pub mod llm;
pub mod matching;
pub mod persona;
pub mod utilities;

pub use matching::{
    build_follow_table, likely_followers, selection_probability, FollowRow, LikelyFollower,
    MatchCandidate, MatchConfig, SelfExclusion,
};
pub use persona::Persona;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
