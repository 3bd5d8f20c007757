use thiserror::Error;
use validator::Validate;
use crate::models::{FundingOpportunity, MatchResult, ScoringWeights, StartupProfile};
use crate::core::{
    ranking::{Ranker, Recommendations},
    scoring::{calculate_match_score, ScoringContext},
};

/// Profile fields that must be present
const REQUIRED_FIELDS: [&str; 2] = ["industry", "region"];

/// Errors surfaced by the recommendation engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

/// Check that the profile carries the fields the engine needs
pub fn validate_profile(profile: &StartupProfile) -> Result<(), ValidationError> {
    match profile.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let field_errors = errors.field_errors();
            let missing = REQUIRED_FIELDS
                .iter()
                .filter(|field| field_errors.contains_key(**field))
                .map(|field| field.to_string())
                .collect();

            Err(ValidationError::MissingFields(missing))
        }
    }
}

/// Recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Profile validation
/// 2. Sector and stage resolution (once per profile)
/// 3. Scoring every candidate
/// 4. Thresholding, ranking and truncation
///
/// Holds only configuration, so a single engine can serve concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    weights: ScoringWeights,
    ranker: Ranker,
}

impl RecommendationEngine {
    pub fn new(weights: ScoringWeights, ranker: Ranker) -> Self {
        Self { weights, ranker }
    }

    pub fn with_default_weights() -> Self {
        Self::default()
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Recommend funding opportunities for a startup profile
    ///
    /// # Arguments
    /// * `profile` - The startup profile to match
    /// * `candidates` - Opportunities supplied by the repository, left untouched
    ///
    /// # Returns
    /// Ranked recommendations, or a validation error when required fields are missing
    pub fn recommend(
        &self,
        profile: &StartupProfile,
        candidates: &[FundingOpportunity],
    ) -> Result<Recommendations, ValidationError> {
        validate_profile(profile)?;

        let context = ScoringContext::for_profile(profile);

        tracing::trace!(
            "Scoring {} candidates for industry {:?} at stage {}",
            candidates.len(),
            profile.industry,
            context.stage
        );

        let scored: Vec<MatchResult> = candidates
            .iter()
            .map(|opportunity| MatchResult {
                name: opportunity.startup_name.clone(),
                fund_name: opportunity.fund_name.clone(),
                stage: opportunity.stage.clone(),
                match_score: calculate_match_score(&context, opportunity, &self.weights),
                funding_amount: whole_euros(opportunity.amount_eur),
                sector: opportunity.sector.clone(),
                year: opportunity.year,
            })
            .collect();

        Ok(self.ranker.rank(scored, candidates.len()))
    }
}

#[inline]
fn whole_euros(amount: f64) -> i64 {
    if amount.is_finite() {
        amount.round() as i64
    } else {
        0
    }
}
