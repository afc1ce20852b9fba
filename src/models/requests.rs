use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use validator::Validate;
use crate::models::domain::{DimensionScores, UserAnswers};

/// Request to aggregate quiz answers into dimension scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreAnswersRequest {
    #[serde(default, deserialize_with = "lenient_answers")]
    pub answers: UserAnswers,
}

/// Request to rank every catalog city against a dimension vector
///
/// Range checks happen in the matcher so the configured policy applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankMatchesRequest {
    pub scores: DimensionScores,
}

/// Request to score answers and return the windowed ranking
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[serde(default, deserialize_with = "lenient_answers")]
    pub answers: UserAnswers,
    /// Number of matches to return after the top match
    #[validate(range(max = 50))]
    pub limit: Option<u16>,
}

/// Request a per-dimension comparison with a single city
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompareCityRequest {
    #[validate(nested)]
    pub scores: DimensionScores,
    #[validate(length(min = 1))]
    #[serde(alias = "city_id", rename = "cityId")]
    pub city_id: String,
}

/// Answers keyed by question id; keys that are not a question id are dropped
/// the same way unknown ids are
fn lenient_answers<'de, D>(deserializer: D) -> Result<UserAnswers, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, i32>::deserialize(deserializer)?;

    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| match key.trim().parse::<u32>() {
            Ok(question_id) => Some((question_id, value)),
            Err(_) => {
                tracing::debug!("Ignoring answer with non-numeric question id '{}'", key);
                None
            }
        })
        .collect())
}
