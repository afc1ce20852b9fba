use crate::core::distance::MAX_TOTAL_DIFFERENCE;

/// Round to the nearest integer, halves away from zero
///
/// Used for both the dimension means and the match percentage so boundary
/// values round the same way everywhere.
#[inline]
pub fn round_half_away(value: f64) -> i32 {
    value.round() as i32
}

/// Convert a total difference into a match percentage
///
/// score = round((1 - diff / 600) * 100)
///
/// A difference of 0 maps to 100 and the maximum difference maps to 0.
#[inline]
pub fn calculate_match_score(total_diff: u32) -> i32 {
    let ratio = f64::from(total_diff) / f64::from(MAX_TOTAL_DIFFERENCE);
    round_half_away((1.0 - ratio) * 100.0)
}
