//! Follower-count probability bands.
//!
//! Maps an audience size to the fraction of matched candidates that
//! rank-and-select keeps. The table is a step function: the first band
//! whose upper bound exceeds the count wins, and the final band is
//! unbounded.

use crate::utilities::errors::InputError;

/// `(exclusive upper bound, probability)` pairs, in ascending order.
pub const FOLLOWER_BANDS: [(i64, f64); 9] = [
    (1_000, 0.1),
    (5_000, 0.2),
    (10_000, 0.3),
    (50_000, 0.4),
    (100_000, 0.5),
    (500_000, 0.6),
    (1_000_000, 0.7),
    (4_000_000, 0.8),
    (8_000_000, 0.9),
];

/// Probability past the last bounded band.
pub const TOP_BAND_PROBABILITY: f64 = 1.0;

/// Selection probability for an audience of the given size.
///
/// Total on the non-negative domain and monotonically non-decreasing in
/// the count.
///
/// # Errors
/// Returns `InputError::InvalidInput` for a negative count; the function
/// never silently defaults.
pub fn selection_probability(follower_count: i64) -> Result<f64, InputError> {
    if follower_count < 0 {
        return Err(InputError::InvalidInput {
            message: format!("follower count is negative: {}", follower_count),
        });
    }
    for (upper_bound, probability) in FOLLOWER_BANDS {
        if follower_count < upper_bound {
            return Ok(probability);
        }
    }
    Ok(TOP_BAND_PROBABILITY)
}
