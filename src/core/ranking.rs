use serde::{Deserialize, Serialize};
use crate::models::MatchResult;

/// Scores at or below this are dropped
pub const MIN_MATCH_SCORE: f64 = 30.0;
/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Ranked recommendations with summary counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub recommendations: Vec<MatchResult>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Thresholds, sorts and truncates scored candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranker {
    min_score: f64,
    limit: usize,
}

impl Ranker {
    pub fn new(min_score: f64, limit: usize) -> Self {
        Self { min_score, limit }
    }

    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Rank scored candidates
    ///
    /// Keeps entries scoring strictly above the minimum, sorts them by score
    /// descending and truncates to the limit. The sort is stable, so equal
    /// scores keep their candidate order.
    pub fn rank(&self, scored: Vec<MatchResult>, total_candidates: usize) -> Recommendations {
        let mut recommendations: Vec<MatchResult> = scored
            .into_iter()
            .filter(|result| result.match_score > self.min_score)
            .collect();

        recommendations.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

        recommendations.truncate(self.limit);

        Recommendations {
            total_matches: recommendations.len(),
            total_candidates,
            recommendations,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(MIN_MATCH_SCORE, MAX_RECOMMENDATIONS)
    }
}
