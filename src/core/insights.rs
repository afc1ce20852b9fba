use crate::models::{DimensionComparison, DimensionInsight, DimensionKey, DimensionScores, Tendency};
use crate::core::distance::dimension_difference;

/// Scores above this value lean towards the high end of an axis
pub const HIGH_TENDENCY_THRESHOLD: i32 = 50;

/// Tendency of a single dimension score
#[inline]
pub fn tendency(score: i32) -> Tendency {
    if score > HIGH_TENDENCY_THRESHOLD {
        Tendency::High
    } else {
        Tendency::Low
    }
}

/// Describe a user profile dimension by dimension, in canonical order
pub fn describe_profile(scores: &DimensionScores) -> Vec<DimensionInsight> {
    scores
        .iter()
        .map(|(dimension, score)| {
            let lean = tendency(score);
            let (low, high) = dimension.descriptions();
            DimensionInsight {
                dimension,
                label: dimension.label(),
                score,
                tendency: lean,
                description: match lean {
                    Tendency::High => high,
                    Tendency::Low => low,
                },
            }
        })
        .collect()
}

/// Put a user vector and a city vector side by side
///
/// The per-dimension differences sum to the total difference used for ranking.
pub fn compare(user: &DimensionScores, city: &DimensionScores) -> Vec<DimensionComparison> {
    DimensionKey::ALL
        .iter()
        .map(|&dimension| DimensionComparison {
            dimension,
            label: dimension.label(),
            user_score: user.get(dimension),
            city_score: city.get(dimension),
            difference: dimension_difference(user, city, dimension),
        })
        .collect()
}
