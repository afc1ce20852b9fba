use crate::models::{DimensionKey, DimensionScores, MAX_SCORE, MIN_SCORE};

/// Largest possible total difference: every dimension apart by the full range
pub const MAX_TOTAL_DIFFERENCE: u32 = (DimensionKey::ALL.len() as u32) * (MAX_SCORE - MIN_SCORE) as u32;

/// Absolute difference between two vectors on one dimension
#[inline]
pub fn dimension_difference(a: &DimensionScores, b: &DimensionScores, key: DimensionKey) -> u32 {
    a.get(key).abs_diff(b.get(key))
}

/// Sum of per-dimension absolute differences (Manhattan distance)
///
/// Bounded by [`MAX_TOTAL_DIFFERENCE`] when both vectors are in range.
#[inline]
pub fn total_difference(a: &DimensionScores, b: &DimensionScores) -> u32 {
    DimensionKey::ALL
        .iter()
        .map(|&key| dimension_difference(a, b, key))
        .sum()
}
