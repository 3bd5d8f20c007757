// Integration tests for Funding Match

use actix_web::{http::StatusCode, test as actix_test, web, App};
use async_trait::async_trait;
use funding_match::core::{RecommendationEngine, ValidationError};
use funding_match::models::{FundingOpportunity, FundingStage, StartupProfile};
use funding_match::routes::{self, AppState};
use funding_match::services::{
    InMemoryRepository, OpportunityFilter, OpportunityRepository, RepositoryError,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn create_opportunity(
    name: &str,
    fund_name: &str,
    stage: FundingStage,
    sector: &str,
    amount_eur: f64,
) -> FundingOpportunity {
    FundingOpportunity {
        id: None,
        startup_name: name.to_string(),
        fund_name: fund_name.to_string(),
        stage,
        sector: sector.to_string(),
        amount_eur,
        year: Some(2024),
    }
}

fn create_candidates() -> Vec<FundingOpportunity> {
    vec![
        create_opportunity("TechVenture NL", "Venture Capital", FundingStage::SeriesA, "FinTech", 5_000_000.0),
        create_opportunity("GameStudio NL", "Venture Capital", FundingStage::SeriesA, "Gaming", 5_000_000.0),
        create_opportunity("GreenEnergy BV", "Crowdfunding", FundingStage::Growth, "CleanTech", 12_000_000.0),
        create_opportunity("DataDrive", "Crowdfunding", FundingStage::PreSeed, "DeepTech", 500_000.0),
        create_opportunity("Legacy Row", "", FundingStage::default(), "", 0.0),
    ]
}

fn create_profile() -> StartupProfile {
    StartupProfile {
        revenue: Some(1_500_000.0),
        funding_amount: Some(5_000_000.0),
        ..StartupProfile::new("fintech", "NL")
    }
}

fn create_state(candidates: Vec<FundingOpportunity>) -> AppState {
    AppState {
        repository: Arc::new(InMemoryRepository::new(candidates)),
        engine: RecommendationEngine::with_default_weights(),
        candidate_limit: 1000,
        listing_limit: 500,
    }
}

/// Repository whose backing store is unreachable
struct FailingRepository;

#[async_trait]
impl OpportunityRepository for FailingRepository {
    async fn top_by_amount(&self, _limit: usize) -> Result<Vec<FundingOpportunity>, RepositoryError> {
        Err(RepositoryError::InvalidConfig("store unavailable".to_string()))
    }

    async fn list(
        &self,
        _filter: &OpportunityFilter,
        _limit: usize,
    ) -> Result<Vec<FundingOpportunity>, RepositoryError> {
        Err(RepositoryError::InvalidConfig("store unavailable".to_string()))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Err(RepositoryError::InvalidConfig("store unavailable".to_string()))
    }

    async fn health_check(&self) -> Result<bool, RepositoryError> {
        Err(RepositoryError::InvalidConfig("store unavailable".to_string()))
    }
}

fn create_failing_state() -> AppState {
    AppState {
        repository: Arc::new(FailingRepository),
        ..create_state(Vec::new())
    }
}

#[test]
fn test_integration_end_to_end_recommendations() {
    let engine = RecommendationEngine::with_default_weights();
    let candidates = create_candidates();

    let result = engine.recommend(&create_profile(), &candidates).unwrap();

    assert_eq!(result.total_candidates, 5);
    assert_eq!(result.total_matches, result.recommendations.len());
    assert_eq!(result.recommendations[0].name, "TechVenture NL");
    assert_eq!(result.recommendations[0].match_score, 100.0);
    assert_eq!(result.recommendations[1].name, "GameStudio NL");
    assert_eq!(result.recommendations[1].match_score, 60.0);

    for r in &result.recommendations {
        assert!(r.match_score > 30.0);
    }
    for pair in result.recommendations.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score, "Recommendations not sorted by score");
    }
}

#[test]
fn test_max_limit_enforcement() {
    let engine = RecommendationEngine::with_default_weights();
    let candidates: Vec<FundingOpportunity> = (0..200)
        .map(|i| {
            create_opportunity(
                &format!("Startup {}", i),
                if i % 2 == 0 { "Venture Capital" } else { "Crowdfunding" },
                FundingStage::SeriesA,
                "FinTech",
                100_000.0 * (i + 1) as f64,
            )
        })
        .collect();

    let result = engine.recommend(&create_profile(), &candidates).unwrap();

    assert_eq!(result.total_candidates, 200);
    assert!(result.recommendations.len() <= 10, "Should not exceed limit of 10");
}

#[test]
fn test_validation_error_produces_no_recommendations() {
    let engine = RecommendationEngine::with_default_weights();
    let profile = StartupProfile::new("", "NL");

    let result = engine.recommend(&profile, &create_candidates());

    assert_eq!(result, Err(ValidationError::MissingFields(vec!["industry".to_string()])));
}

#[actix_web::test]
async fn test_recommendations_endpoint() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(create_candidates())))
            .app_data(routes::json_config())
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({
            "industry": "fintech",
            "region": "NL",
            "revenue": "1500000",
            "fundingAmount": 5000000
        }))
        .to_request();

    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["totalCandidates"], 5);
    assert_eq!(body["recommendations"][0]["name"], "TechVenture NL");
    assert_eq!(body["recommendations"][0]["matchScore"], 100.0);
    assert_eq!(body["recommendations"][0]["fundingAmount"], 5000000);
    assert_eq!(body["recommendations"][0]["stage"], "Series A");
    assert_eq!(
        body["message"],
        format!("Found {} matches from 5 funding opportunities", body["totalMatches"])
    );
}

#[actix_web::test]
async fn test_recommendations_endpoint_rejects_missing_fields() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(create_candidates())))
            .app_data(routes::json_config())
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({ "industry": "fintech" }))
        .to_request();

    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["message"], "Missing required fields: region");
}

#[actix_web::test]
async fn test_recommendations_endpoint_rejects_malformed_json() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(Vec::new())))
            .app_data(routes::json_config())
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();

    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_funding_listing_endpoint() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(create_candidates())))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/funding?category=Crowdfunding&sector=all")
        .to_request();

    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["total"], 2);
    assert_eq!(body["data"][0]["name"], "GreenEnergy BV");
    assert_eq!(body["data"][0]["type"], "Crowdfunding");
    assert_eq!(body["data"][0]["amount"], "€12,000,000");
    assert_eq!(body["data"][0]["description"], "CleanTech - Crowdfunding");
    assert_eq!(body["data"][1]["name"], "DataDrive");
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(Vec::new())))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_health_endpoint_reports_degraded_repository() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_failing_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
}

#[actix_web::test]
async fn test_recommendations_endpoint_repository_failure() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_failing_state()))
            .app_data(routes::json_config())
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({ "industry": "fintech", "region": "NL" }))
        .to_request();

    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "Failed to load funding opportunities");
    assert_eq!(body["message"], "Invalid configuration: store unavailable");
    assert_eq!(body["status_code"], 500);
}

#[actix_web::test]
async fn test_funding_listing_repository_failure() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_failing_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/api/v1/funding").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "Failed to list funding opportunities");
}
