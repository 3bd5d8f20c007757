use async_trait::async_trait;
use thiserror::Error;
use crate::models::{FundingOpportunity, FundingQuery};

/// Errors that can occur when reading funding opportunities
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Filter for browsing opportunities
///
/// `category` and `sector` are case-insensitive substring matches on the fund
/// name and sector; `stage` must match exactly. Empty values and the literal
/// `all` disable a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpportunityFilter {
    pub category: Option<String>,
    pub sector: Option<String>,
    pub stage: Option<String>,
}

impl OpportunityFilter {
    pub fn category(&self) -> Option<&str> {
        active(&self.category)
    }

    pub fn sector(&self) -> Option<&str> {
        active(&self.sector)
    }

    pub fn stage(&self) -> Option<&str> {
        active(&self.stage)
    }

    /// In-process equivalent of the SQL filter
    pub fn matches(&self, opportunity: &FundingOpportunity) -> bool {
        if let Some(category) = self.category() {
            if !contains_ignore_case(&opportunity.fund_name, category) {
                return false;
            }
        }

        if let Some(sector) = self.sector() {
            if !contains_ignore_case(&opportunity.sector, sector) {
                return false;
            }
        }

        if let Some(stage) = self.stage() {
            if opportunity.stage.as_str() != stage {
                return false;
            }
        }

        true
    }
}

impl From<FundingQuery> for OpportunityFilter {
    fn from(query: FundingQuery) -> Self {
        Self {
            category: query.category,
            sector: query.sector,
            stage: query.stage,
        }
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != "all")
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Source of funding opportunities for the recommendation engine
#[async_trait]
pub trait OpportunityRepository: Send + Sync {
    /// Up to `limit` opportunities, largest offered amount first
    async fn top_by_amount(&self, limit: usize) -> Result<Vec<FundingOpportunity>, RepositoryError>;

    /// Filtered opportunities, largest offered amount first
    async fn list(
        &self,
        filter: &OpportunityFilter,
        limit: usize,
    ) -> Result<Vec<FundingOpportunity>, RepositoryError>;

    /// Total number of stored opportunities
    async fn count(&self) -> Result<usize, RepositoryError>;

    /// Health check for the backing store
    async fn health_check(&self) -> Result<bool, RepositoryError>;
}
