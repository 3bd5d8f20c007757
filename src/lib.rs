//! Funding Match - funding opportunity recommendations for startups
//!
//! This library scores a startup profile against a set of funding
//! opportunities and returns a ranked shortlist. The scoring core is pure and
//! synchronous; repositories and HTTP routes are layered around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{RecommendationEngine, Ranker, Recommendations, ValidationError};
pub use models::{StartupProfile, FundingOpportunity, FundingStage, MatchResult, ScoringWeights};
