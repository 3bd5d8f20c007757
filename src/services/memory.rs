use async_trait::async_trait;
use std::path::Path;
use crate::models::FundingOpportunity;
use crate::services::repository::{OpportunityFilter, OpportunityRepository, RepositoryError};

/// In-process opportunity store
///
/// Keeps opportunities pre-sorted by offered amount so reads mirror the
/// ordering of the SQL repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    opportunities: Vec<FundingOpportunity>,
}

impl InMemoryRepository {
    pub fn new(mut opportunities: Vec<FundingOpportunity>) -> Self {
        opportunities.sort_by(|a, b| b.amount_eur.total_cmp(&a.amount_eur));

        Self { opportunities }
    }

    /// Load opportunities from a JSON array of funding opportunities
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let opportunities: Vec<FundingOpportunity> = serde_json::from_str(&contents)?;

        tracing::info!(
            "Loaded {} funding opportunities from {}",
            opportunities.len(),
            path.as_ref().display()
        );

        Ok(Self::new(opportunities))
    }
}

#[async_trait]
impl OpportunityRepository for InMemoryRepository {
    async fn top_by_amount(&self, limit: usize) -> Result<Vec<FundingOpportunity>, RepositoryError> {
        Ok(self.opportunities.iter().take(limit).cloned().collect())
    }

    async fn list(
        &self,
        filter: &OpportunityFilter,
        limit: usize,
    ) -> Result<Vec<FundingOpportunity>, RepositoryError> {
        Ok(self
            .opportunities
            .iter()
            .filter(|opportunity| filter.matches(opportunity))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.opportunities.len())
    }

    async fn health_check(&self) -> Result<bool, RepositoryError> {
        Ok(true)
    }
}
