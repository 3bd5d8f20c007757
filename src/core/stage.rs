use crate::models::FundingStage;

pub const GROWTH_REVENUE_THRESHOLD: f64 = 2_000_000.0;
pub const SERIES_A_REVENUE_THRESHOLD: f64 = 1_000_000.0;
pub const SEED_REVENUE_THRESHOLD: f64 = 100_000.0;

/// Derive the funding stage a startup is at from its revenue
///
/// Bands are checked from highest to lowest; revenue must strictly exceed a
/// threshold to reach that band. Non-finite revenue counts as 0.
pub fn classify_stage(revenue: f64) -> FundingStage {
    let revenue = if revenue.is_finite() { revenue } else { 0.0 };

    if revenue > GROWTH_REVENUE_THRESHOLD {
        FundingStage::Growth
    } else if revenue > SERIES_A_REVENUE_THRESHOLD {
        FundingStage::SeriesA
    } else if revenue > SEED_REVENUE_THRESHOLD {
        FundingStage::Seed
    } else {
        FundingStage::PreSeed
    }
}

/// Whether the opportunity targets the stage right after the profile's
///
/// Only Pre-Seed→Seed, Seed→Series A and Series A→Growth qualify.
#[inline]
pub fn is_next_stage_up(profile_stage: &FundingStage, opportunity_stage: &FundingStage) -> bool {
    matches!(
        (profile_stage, opportunity_stage),
        (FundingStage::PreSeed, FundingStage::Seed)
            | (FundingStage::Seed, FundingStage::SeriesA)
            | (FundingStage::SeriesA, FundingStage::Growth)
    )
}
