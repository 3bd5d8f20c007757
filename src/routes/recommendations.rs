use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use crate::core::{validate_profile, RecommendationEngine};
use crate::models::{
    ErrorResponse, FundingListResponse, FundingListing, FundingQuery, HealthResponse,
    RecommendationsResponse, StartupProfile,
};
use crate::services::{OpportunityFilter, OpportunityRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn OpportunityRepository>,
    pub engine: RecommendationEngine,
    pub candidate_limit: usize,
    pub listing_limit: usize,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend))
        .route("/funding", web::get().to(list_funding));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = match state.repository.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Repository health check failed: {}", e);
            false
        }
    };

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "industry": "fintech",
///   "region": "NL",
///   "revenue": 1500000,
///   "fundingAmount": 5000000
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<StartupProfile>,
) -> impl Responder {
    let profile = req.into_inner();

    // Reject before touching the repository
    if let Err(e) = validate_profile(&profile) {
        tracing::info!("Validation failed for recommendation request: {}", e);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: e.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Recommending funding for industry: {}, region: {}",
        profile.industry,
        profile.region
    );

    let candidates = match state.repository.top_by_amount(state.candidate_limit).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to load funding opportunities: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load funding opportunities".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Loaded {} candidate opportunities", candidates.len());

    let result = match state.engine.recommend(&profile, &candidates) {
        Ok(result) => result,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    let response = RecommendationsResponse {
        success: true,
        message: format!(
            "Found {} matches from {} funding opportunities",
            result.total_matches, result.total_candidates
        ),
        total_matches: result.total_matches,
        total_candidates: result.total_candidates,
        recommendations: result.recommendations,
    };

    tracing::info!(
        "Returning {} recommendations for industry {} (from {} candidates)",
        response.total_matches,
        profile.industry,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Funding listing endpoint
///
/// GET /api/v1/funding?category={category}&sector={sector}&stage={stage}
///
/// Every filter is optional; `all` disables it.
async fn list_funding(
    state: web::Data<AppState>,
    query: web::Query<FundingQuery>,
) -> impl Responder {
    let filter = OpportunityFilter::from(query.into_inner());

    match state.repository.list(&filter, state.listing_limit).await {
        Ok(opportunities) => {
            let data: Vec<FundingListing> = opportunities.iter().map(FundingListing::from).collect();

            HttpResponse::Ok().json(FundingListResponse {
                success: true,
                total: data.len(),
                data,
            })
        }
        Err(e) => {
            tracing::error!("Failed to list funding opportunities: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list funding opportunities".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
