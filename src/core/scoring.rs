use crate::models::{FundCategory, FundingOpportunity, FundingStage, ScoringWeights, StartupProfile};
use crate::core::{sectors::RelevantSectors, stage::{classify_stage, is_next_stage_up}};

/// Requested amounts above this favour venture capital funds
pub const LARGE_ROUND_THRESHOLD: f64 = 1_000_000.0;
/// Requested amounts at or below this favour crowdfunding
pub const SMALL_ROUND_THRESHOLD: f64 = 500_000.0;
/// Points for a fund of a known category that does not fit the round size
pub const FUNDING_TYPE_PARTIAL_POINTS: f64 = 10.0;
/// Points for an opportunity one stage ahead of the profile
pub const STAGE_ADJACENT_POINTS: f64 = 10.0;

/// Per-profile inputs resolved once and shared across all candidates
#[derive(Debug, Clone)]
pub struct ScoringContext {
    pub sectors: RelevantSectors,
    pub stage: FundingStage,
    pub requested_amount: f64,
}

impl ScoringContext {
    pub fn for_profile(profile: &StartupProfile) -> Self {
        Self {
            sectors: RelevantSectors::resolve(&profile.industry),
            stage: classify_stage(profile.revenue()),
            requested_amount: profile.requested_amount(),
        }
    }
}

/// Individual sub-scores for one opportunity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub sector: f64,
    pub funding_type: f64,
    pub amount: f64,
    pub stage: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.sector + self.funding_type + self.amount + self.stage
    }
}

/// Calculate the sub-scores for an opportunity
pub fn calculate_breakdown(
    context: &ScoringContext,
    opportunity: &FundingOpportunity,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    ScoreBreakdown {
        sector: sector_score(&context.sectors, &opportunity.sector, weights.sector),
        funding_type: funding_type_score(
            context.requested_amount,
            &opportunity.fund_name,
            weights.funding_type,
        ),
        amount: amount_proximity_score(
            context.requested_amount,
            opportunity.amount_eur,
            weights.amount,
        ),
        stage: stage_score(&context.stage, &opportunity.stage, weights.stage),
    }
}

/// Calculate a match score (0-100, two decimals) for an opportunity
///
/// Scoring formula:
/// score = (
///     sector          # 40 if the sector contains a relevant keyword
///   + funding_type    # 20 if the fund category fits the round size, 10 if known
///   + amount          # 25 * min(requested, offered) / max(requested, offered)
///   + stage           # 15 on exact stage, 10 one stage ahead
/// )
pub fn calculate_match_score(
    context: &ScoringContext,
    opportunity: &FundingOpportunity,
    weights: &ScoringWeights,
) -> f64 {
    let total = calculate_breakdown(context, opportunity, weights).total();
    round_to_cents(total.min(100.0).max(0.0))
}

/// Full weight when the sector matches any relevant keyword, otherwise 0
#[inline]
pub fn sector_score(sectors: &RelevantSectors, sector: &str, weight: f64) -> f64 {
    if sectors.matches(sector) {
        weight
    } else {
        0.0
    }
}

/// Funding type score
///
/// Large rounds pair with venture capital, small rounds with crowdfunding.
/// A known category that does not fit the round size earns partial credit.
#[inline]
pub fn funding_type_score(requested_amount: f64, fund_name: &str, weight: f64) -> f64 {
    let venture_capital = FundCategory::VentureCapital.is_indicated_by(fund_name);
    let crowdfunding = FundCategory::Crowdfunding.is_indicated_by(fund_name);

    if requested_amount > LARGE_ROUND_THRESHOLD && venture_capital {
        weight
    } else if requested_amount <= SMALL_ROUND_THRESHOLD && crowdfunding {
        weight
    } else if venture_capital || crowdfunding {
        FUNDING_TYPE_PARTIAL_POINTS.min(weight)
    } else {
        0.0
    }
}

/// Symmetric amount proximity score
///
/// Peaks at `weight` when both amounts are equal and decays toward 0 as
/// they diverge. Non-positive or non-finite amounts score 0.
#[inline]
pub fn amount_proximity_score(requested: f64, offered: f64, weight: f64) -> f64 {
    let valid = |amount: f64| amount.is_finite() && amount > 0.0;
    if !valid(requested) || !valid(offered) {
        return 0.0;
    }

    requested.min(offered) / requested.max(offered) * weight
}

/// Stage score: exact match or one stage ahead of the profile
#[inline]
pub fn stage_score(profile_stage: &FundingStage, opportunity_stage: &FundingStage, weight: f64) -> f64 {
    if profile_stage == opportunity_stage {
        weight
    } else if is_next_stage_up(profile_stage, opportunity_stage) {
        STAGE_ADJACENT_POINTS.min(weight)
    } else {
        0.0
    }
}

#[inline]
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
