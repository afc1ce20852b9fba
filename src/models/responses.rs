use serde::Serialize;
use crate::models::domain::{City, DimensionComparison, DimensionInsight, DimensionScores, MatchResult};

/// Response for the score aggregation endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ScoreAnswersResponse {
    pub scores: DimensionScores,
    pub profile: Vec<DimensionInsight>,
}

/// Response for the full ranking endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RankMatchesResponse<'a> {
    pub matches: Vec<MatchResult<'a>>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FindMatchesResponse<'a> {
    pub scores: DimensionScores,
    pub profile: Vec<DimensionInsight>,
    #[serde(rename = "topMatch")]
    pub top_match: Option<MatchResult<'a>>,
    #[serde(rename = "otherMatches")]
    pub other_matches: Vec<MatchResult<'a>>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Response for the city comparison endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CompareCityResponse<'a> {
    pub city: &'a City,
    pub score: i32,
    pub diff: u32,
    pub dimensions: Vec<DimensionComparison>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub questions: usize,
    pub cities: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
