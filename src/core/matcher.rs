use std::fmt;
use thiserror::Error;
use crate::models::{City, DimensionKey, DimensionScores, MatchResult, OutOfRangePolicy, Question, UserAnswers};
use crate::core::{
    aggregate::aggregate_scores,
    distance::total_difference,
    scoring::calculate_match_score,
};

/// Which vector failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorOwner {
    User,
    City(String),
}

impl fmt::Display for VectorOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorOwner::User => write!(f, "user"),
            VectorOwner::City(id) => write!(f, "city '{}'", id),
        }
    }
}

/// Errors that can occur while ranking
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid dimension vector for {owner}: {dimension} = {value} is outside [0, 100]")]
    InvalidVector {
        owner: VectorOwner,
        dimension: DimensionKey,
        value: i32,
    },
}

/// Full ordering of the catalog for one user vector
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    pub matches: Vec<MatchResult<'a>>,
}

/// Top match plus the matches that follow it
#[derive(Debug, Clone)]
pub struct RankingWindow<'a> {
    pub top_match: Option<MatchResult<'a>>,
    pub other_matches: Vec<MatchResult<'a>>,
    pub total_results: usize,
}

impl<'a> Ranking<'a> {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Best match, `None` for an empty catalog
    pub fn top(&self) -> Option<&MatchResult<'a>> {
        self.matches.first()
    }

    /// Split into the top match and up to `other_limit` following matches
    pub fn window(&self, other_limit: usize) -> RankingWindow<'a> {
        RankingWindow {
            top_match: self.matches.first().copied(),
            other_matches: self.matches.iter().skip(1).take(other_limit).copied().collect(),
            total_results: self.matches.len(),
        }
    }

    pub fn into_matches(self) -> Vec<MatchResult<'a>> {
        self.matches
    }
}

/// Ranks catalog cities by similarity to a user vector
///
/// # Pipeline Stages
/// 1. Boundary check of the user vector and every city vector
/// 2. Total absolute difference per city
/// 3. Match percentage from the difference
/// 4. Stable sort by percentage, descending
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    policy: OutOfRangePolicy,
}

impl Matcher {
    pub fn new(policy: OutOfRangePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OutOfRangePolicy {
        self.policy
    }

    /// Apply the out-of-range policy to a vector entering the ranker
    fn check(&self, scores: &DimensionScores, owner: impl FnOnce() -> VectorOwner) -> Result<DimensionScores, MatchError> {
        let Some((dimension, value)) = scores.first_out_of_range() else {
            return Ok(*scores);
        };

        match self.policy {
            OutOfRangePolicy::Reject => Err(MatchError::InvalidVector {
                owner: owner(),
                dimension,
                value,
            }),
            OutOfRangePolicy::Clamp => {
                tracing::warn!("Clamping {} = {} for {}", dimension, value, owner());
                Ok(scores.clamped())
            }
        }
    }

    /// Rank every city against the user vector
    ///
    /// # Arguments
    /// * `user` - The user's dimension vector
    /// * `cities` - The city catalog, in catalog order
    ///
    /// # Returns
    /// The full ranking, highest match first; equal scores keep catalog order
    pub fn rank<'a>(&self, user: &DimensionScores, cities: &'a [City]) -> Result<Ranking<'a>, MatchError> {
        let user = self.check(user, || VectorOwner::User)?;

        let mut matches = cities
            .iter()
            .map(|city| -> Result<MatchResult<'a>, MatchError> {
                let city_scores = self.check(&city.scores, || VectorOwner::City(city.id.clone()))?;
                let diff = total_difference(&user, &city_scores);

                Ok(MatchResult {
                    city,
                    score: calculate_match_score(diff),
                    diff,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Stable: ties stay in catalog order
        matches.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            "Ranked {} cities, top score {:?}",
            matches.len(),
            matches.first().map(|m| m.score)
        );

        Ok(Ranking { matches })
    }

    /// Aggregate answers and rank the catalog in one pass
    pub fn find<'a>(
        &self,
        answers: &UserAnswers,
        questions: &[Question],
        cities: &'a [City],
    ) -> Result<(DimensionScores, Ranking<'a>), MatchError> {
        let scores = aggregate_scores(answers, questions);
        let ranking = self.rank(&scores, cities)?;
        Ok((scores, ranking))
    }
}

/// Rank every city against the user vector, rejecting out-of-range input
pub fn rank_matches<'a>(user: &DimensionScores, cities: &'a [City]) -> Result<Vec<MatchResult<'a>>, MatchError> {
    Matcher::default().rank(user, cities).map(Ranking::into_matches)
}
