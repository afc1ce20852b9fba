use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    CompareCityRequest, CompareCityResponse, ErrorResponse, FindMatchesRequest, FindMatchesResponse,
    HealthResponse, RankMatchesRequest, RankMatchesResponse, ScoreAnswersRequest, ScoreAnswersResponse,
};
use crate::core::{
    aggregate_scores, calculate_match_score, compare, describe_profile, total_difference, Matcher,
};
use crate::services::Catalog;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub other_matches_limit: usize,
}

/// Configure all quiz and match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/questions", web::get().to(list_questions))
        .route("/cities", web::get().to(list_cities))
        .route("/scores", web::post().to(score_answers))
        .route("/matches/rank", web::post().to(rank_matches))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/compare", web::post().to(compare_city));
}

fn error_response(status: u16, error: &str, message: String) -> HttpResponse {
    let body = ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status,
    };

    match status {
        404 => HttpResponse::NotFound().json(body),
        400 => HttpResponse::BadRequest().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        questions: state.catalog.questions().len(),
        cities: state.catalog.cities().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/v1/questions
async fn list_questions(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.questions())
}

/// GET /api/v1/cities
async fn list_cities(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.cities())
}

/// Aggregate answers into dimension scores
///
/// POST /api/v1/scores
///
/// Request body:
/// ```json
/// { "answers": { "1": 80, "2": 20 } }
/// ```
async fn score_answers(
    state: web::Data<AppState>,
    req: web::Json<ScoreAnswersRequest>,
) -> impl Responder {
    let scores = aggregate_scores(&req.answers, state.catalog.questions());

    tracing::debug!("Scored {} answers: {:?}", req.answers.len(), scores);

    HttpResponse::Ok().json(ScoreAnswersResponse {
        profile: describe_profile(&scores),
        scores,
    })
}

/// Rank every city against a dimension vector
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "scores": {
///     "lifePace": 70, "modernTraditional": 40, "vitalityTranquility": 65,
///     "urbanNature": 80, "costTolerance": 55, "climatePreference": 30
///   }
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankMatchesRequest>,
) -> impl Responder {
    // Range violations are left to the matcher so the configured policy applies
    let ranking = match state.matcher.rank(&req.scores, state.catalog.cities()) {
        Ok(ranking) => ranking,
        Err(e) => {
            tracing::info!("Rejected rank request: {}", e);
            return error_response(400, "Invalid dimension scores", e.to_string());
        }
    };

    HttpResponse::Ok().json(RankMatchesResponse {
        total_results: ranking.len(),
        matches: ranking.into_matches(),
    })
}

/// Score answers and return the top match plus the following matches
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// { "answers": { "1": 80, "2": 20 }, "limit": 6 }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return error_response(400, "Validation failed", errors.to_string());
    }

    let other_limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.other_matches_limit);

    let (scores, ranking) = match state.matcher.find(
        &req.answers,
        state.catalog.questions(),
        state.catalog.cities(),
    ) {
        Ok(found) => found,
        Err(e) => {
            tracing::info!("Rejected find request: {}", e);
            return error_response(400, "Invalid answers", e.to_string());
        }
    };

    let window = ranking.window(other_limit);

    tracing::info!(
        "Returning top match {:?} and {} others (from {} cities)",
        window.top_match.map(|m| m.city.id.as_str()),
        window.other_matches.len(),
        window.total_results
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        profile: describe_profile(&scores),
        scores,
        top_match: window.top_match,
        other_matches: window.other_matches,
        total_results: window.total_results,
    })
}

/// Compare a dimension vector with one city, dimension by dimension
///
/// POST /api/v1/matches/compare
///
/// Request body:
/// ```json
/// { "scores": { ... }, "cityId": "chengdu" }
/// ```
async fn compare_city(
    state: web::Data<AppState>,
    req: web::Json<CompareCityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(400, "Validation failed", errors.to_string());
    }

    let Some(city) = state.catalog.city(&req.city_id) else {
        return error_response(404, "City not found", format!("No city with id '{}'", req.city_id));
    };

    let diff = total_difference(&req.scores, &city.scores);

    HttpResponse::Ok().json(CompareCityResponse {
        city,
        score: calculate_match_score(diff),
        diff,
        dimensions: compare(&req.scores, &city.scores),
    })
}
