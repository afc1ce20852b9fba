// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    City, DimensionComparison, DimensionInsight, DimensionKey, DimensionScores, MatchResult,
    OutOfRangePolicy, Question, QuestionOption, Tendency, UserAnswers, MAX_SCORE, MIN_SCORE,
};
pub use requests::{CompareCityRequest, FindMatchesRequest, RankMatchesRequest, ScoreAnswersRequest};
pub use responses::{
    CompareCityResponse, ErrorResponse, FindMatchesResponse, HealthResponse, RankMatchesResponse,
    ScoreAnswersResponse,
};
