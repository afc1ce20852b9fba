// Core algorithm exports
pub mod aggregate;
pub mod distance;
pub mod insights;
pub mod matcher;
pub mod scoring;

pub use aggregate::aggregate_scores;
pub use distance::{dimension_difference, total_difference, MAX_TOTAL_DIFFERENCE};
pub use insights::{compare, describe_profile, tendency};
pub use matcher::{rank_matches, MatchError, Matcher, Ranking, RankingWindow, VectorOwner};
pub use scoring::{calculate_match_score, round_half_away};
