use std::collections::HashMap;
use crate::models::{DimensionKey, DimensionScores, Question, UserAnswers};
use crate::core::scoring::round_half_away;

/// Running sum and answer count for one dimension
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    sum: i64,
    count: u32,
}

/// Aggregate quiz answers into a complete dimension vector
///
/// Each dimension scores the rounded mean of the values chosen for the
/// questions assigned to it. A dimension with no answered questions scores 0.
/// Answers for question ids missing from `questions` are ignored.
///
/// # Arguments
/// * `answers` - Chosen option value per answered question id
/// * `questions` - The question catalog
///
/// # Returns
/// DimensionScores with every dimension filled in
pub fn aggregate_scores(answers: &UserAnswers, questions: &[Question]) -> DimensionScores {
    let by_id: HashMap<u32, DimensionKey> = questions
        .iter()
        .map(|question| (question.id, question.dimension))
        .collect();

    let mut tallies = [Tally::default(); DimensionKey::ALL.len()];

    // Drop answers that do not resolve to a known question
    let resolved = answers.iter().filter_map(|(question_id, &value)| {
        match by_id.get(question_id) {
            Some(&dimension) => Some((dimension, value)),
            None => {
                tracing::debug!("Ignoring answer for unknown question {}", question_id);
                None
            }
        }
    });

    for (dimension, value) in resolved {
        let tally = &mut tallies[dimension.index()];
        tally.sum += i64::from(value);
        tally.count += 1;
    }

    // Empty groups are zero-filled explicitly
    DimensionScores::from_fn(|dimension| {
        let tally = tallies[dimension.index()];
        if tally.count == 0 {
            0
        } else {
            round_half_away(tally.sum as f64 / f64::from(tally.count))
        }
    })
}
