// Core algorithm exports
pub mod engine;
pub mod ranking;
pub mod scoring;
pub mod sectors;
pub mod stage;

pub use engine::{RecommendationEngine, ValidationError, validate_profile};
pub use ranking::{Ranker, Recommendations, MIN_MATCH_SCORE, MAX_RECOMMENDATIONS};
pub use scoring::{calculate_match_score, calculate_breakdown, ScoreBreakdown, ScoringContext};
pub use sectors::{sectors_for_industry, RelevantSectors};
pub use stage::{classify_stage, is_next_stage_up};
