// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    StartupProfile, FundingOpportunity, FundingStage, FundCategory, MatchResult, ScoringWeights,
    DEFAULT_FUNDING_AMOUNT,
};
pub use requests::FundingQuery;
pub use responses::{
    RecommendationsResponse, FundingListing, FundingListResponse, HealthResponse, ErrorResponse,
    format_eur,
};
