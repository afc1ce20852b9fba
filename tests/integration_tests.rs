// Integration tests for City Match

use actix_web::{http::StatusCode, test as actix_test, web, App};
use city_match::core::Matcher;
use city_match::models::{DimensionScores, OutOfRangePolicy, UserAnswers};
use city_match::routes::{self, matches::AppState};
use city_match::services::Catalog;
use serde_json::{json, Value};
use std::sync::Arc;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

fn load_catalog() -> Catalog {
    Catalog::from_json_str(CATALOG_JSON).expect("shipped catalog should be valid")
}

fn create_state(policy: OutOfRangePolicy) -> AppState {
    AppState {
        catalog: Arc::new(load_catalog()),
        matcher: Matcher::new(policy),
        other_matches_limit: 6,
    }
}

/// Pick the same option position for every question
fn answer_all(catalog: &Catalog, pick_last: bool) -> UserAnswers {
    catalog
        .questions()
        .iter()
        .map(|q| {
            let option = if pick_last { q.options.last() } else { q.options.first() };
            (q.id, option.map(|o| o.value).unwrap_or_default())
        })
        .collect()
}

#[test]
fn test_shipped_catalog_loads() {
    let catalog = load_catalog();

    assert_eq!(catalog.questions().len(), 18);
    assert_eq!(catalog.cities().len(), 16);
}

#[tokio::test]
async fn test_catalog_load_from_file() {
    let catalog = Catalog::load_from("data/catalog.json").await.unwrap();
    assert_eq!(catalog.cities().len(), 16);

    assert!(Catalog::load_from("data/missing.json").await.is_err());
}

#[test]
fn test_integration_end_to_end_matching() {
    let catalog = load_catalog();
    let matcher = Matcher::default();

    let answers = answer_all(&catalog, false);
    let (scores, ranking) = matcher
        .find(&answers, catalog.questions(), catalog.cities())
        .unwrap();

    assert_eq!(
        scores,
        DimensionScores {
            life_pace: 12,
            modern_traditional: 12,
            vitality_tranquility: 8,
            urban_nature: 8,
            cost_tolerance: 10,
            climate_preference: 10,
        }
    );

    assert_eq!(ranking.len(), 16);
    let top = ranking.top().unwrap();
    assert_eq!(top.city.id, "lhasa");
    assert_eq!(top.diff, 44);
    assert_eq!(top.score, 93);
    assert!(ranking.matches.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_integration_tie_keeps_catalog_order() {
    let catalog = load_catalog();
    let answers = answer_all(&catalog, true);

    let (_, ranking) = Matcher::default()
        .find(&answers, catalog.questions(), catalog.cities())
        .unwrap();

    // Shanghai and Shenzhen both score 93; Shanghai comes first in the catalog
    assert_eq!(ranking.matches[0].city.id, "shanghai");
    assert_eq!(ranking.matches[0].score, 93);
    assert_eq!(ranking.matches[1].city.id, "shenzhen");
    assert_eq!(ranking.matches[1].score, 93);
    assert!(ranking.matches[1].diff < ranking.matches[0].diff);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(OutOfRangePolicy::Reject)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/health").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["cities"], 16);
    assert_eq!(body["questions"], 18);
}

#[actix_web::test]
async fn test_scores_endpoint() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(OutOfRangePolicy::Reject)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/scores")
        .set_json(json!({ "answers": { "1": 90, "2": 95, "999": 0 } }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["scores"]["lifePace"], 93);
    assert_eq!(body["scores"]["urbanNature"], 0);
    assert_eq!(body["profile"][0]["dimension"], "lifePace");
    assert_eq!(body["profile"][0]["tendency"], "high");
}

#[actix_web::test]
async fn test_scores_endpoint_skips_non_id_keys() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(OutOfRangePolicy::Reject)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/scores")
        .set_json(json!({ "answers": { "1": 90, "q7": 50, "-3": 10 } }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["scores"]["lifePace"], 90);
}

#[actix_web::test]
async fn test_malformed_body_returns_json_error() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(OutOfRangePolicy::Reject)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/scores")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"answers": "#)
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
    assert_eq!(body["statusCode"], 400);
    assert!(body["message"].as_str().unwrap_or_default().starts_with("Invalid JSON: "));
}

#[actix_web::test]
async fn test_find_endpoint_windows_results() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(OutOfRangePolicy::Reject)))
            .configure(routes::configure_routes),
    )
    .await;

    let answers: Value = answer_all(&load_catalog(), false)
        .into_iter()
        .map(|(id, value)| (id.to_string(), json!(value)))
        .collect::<serde_json::Map<String, Value>>()
        .into();

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({ "answers": answers }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["topMatch"]["city"]["id"], "lhasa");
    assert_eq!(body["topMatch"]["score"], 93);
    assert_eq!(body["otherMatches"].as_array().map(Vec::len), Some(6));
    assert_eq!(body["otherMatches"][0]["city"]["id"], "dali");
    assert_eq!(body["totalResults"], 16);

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({ "answers": answers, "limit": 2 }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["otherMatches"].as_array().map(Vec::len), Some(2));

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({ "answers": answers, "limit": 500 }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_rank_endpoint_policies() {
    let scores = json!({
        "lifePace": 10, "modernTraditional": 10, "vitalityTranquility": 10,
        "urbanNature": 10, "costTolerance": 10, "climatePreference": 160
    });

    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(OutOfRangePolicy::Reject)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({ "scores": scores }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(OutOfRangePolicy::Clamp)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({ "scores": scores }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalResults"], 16);
    assert_eq!(body["matches"].as_array().map(Vec::len), Some(16));
}

#[actix_web::test]
async fn test_compare_endpoint() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(OutOfRangePolicy::Reject)))
            .configure(routes::configure_routes),
    )
    .await;

    let scores = json!({
        "lifePace": 10, "modernTraditional": 5, "vitalityTranquility": 15,
        "urbanNature": 5, "costTolerance": 25, "climatePreference": 20
    });

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/compare")
        .set_json(json!({ "scores": scores, "cityId": "lhasa" }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["score"], 100);
    assert_eq!(body["diff"], 0);
    assert_eq!(body["dimensions"].as_array().map(Vec::len), Some(6));

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/compare")
        .set_json(json!({ "scores": scores, "cityId": "atlantis" }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
