use serde::{Deserialize, Serialize};
use crate::models::domain::{FundCategory, FundingOpportunity, FundingStage, MatchResult};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub recommendations: Vec<MatchResult>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    pub message: String,
}

/// One row of the funding listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingListing {
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "fundName")]
    pub fund_name: String,
    #[serde(rename = "type")]
    pub category: FundCategory,
    pub amount: String,
    pub stage: FundingStage,
    pub description: String,
    pub sector: String,
    pub year: Option<i32>,
}

impl From<&FundingOpportunity> for FundingListing {
    fn from(opportunity: &FundingOpportunity) -> Self {
        let category = FundCategory::classify(&opportunity.fund_name);

        Self {
            id: opportunity.id,
            name: opportunity.startup_name.clone(),
            fund_name: opportunity.fund_name.clone(),
            category,
            amount: format_eur(opportunity.amount_eur),
            stage: opportunity.stage.clone(),
            description: format!("{} - {}", opportunity.sector, category),
            sector: opportunity.sector.clone(),
            year: opportunity.year,
        }
    }
}

/// Response for the funding listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingListResponse {
    pub success: bool,
    pub data: Vec<FundingListing>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Format a euro amount rounded to whole euros with thousands separators
pub fn format_eur(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() as i64 } else { 0 };
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-€{}", grouped)
    } else {
        format!("€{}", grouped)
    }
}
