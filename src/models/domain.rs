use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Amount a startup is assumed to seek when the profile does not say
pub const DEFAULT_FUNDING_AMOUNT: f64 = 250_000.0;

/// Startup profile submitted by the request layer
///
/// Only `industry` and `region` are required. Numeric fields are lenient:
/// numbers, numeric strings and `null` are all accepted, and anything that
/// does not parse as a finite number is treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct StartupProfile {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub industry: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub region: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub employees: Option<f64>,
    #[serde(rename = "marketShare", default, deserialize_with = "lenient::number")]
    pub market_share: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub valuation: Option<f64>,
    #[serde(rename = "fundingAmount", default, deserialize_with = "lenient::number")]
    pub funding_amount: Option<f64>,
    #[serde(rename = "yearFounded", default, deserialize_with = "lenient::number")]
    pub year_founded: Option<f64>,
    #[serde(default)]
    pub profitable: Option<bool>,
}

impl StartupProfile {
    pub fn new(industry: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            region: region.into(),
            ..Self::default()
        }
    }

    /// Revenue signal used for stage classification, 0 when absent
    pub fn revenue(&self) -> f64 {
        self.revenue.filter(|r| r.is_finite()).unwrap_or(0.0)
    }

    /// Amount the startup is seeking, falling back to [`DEFAULT_FUNDING_AMOUNT`]
    /// when missing or not strictly positive
    pub fn requested_amount(&self) -> f64 {
        self.funding_amount
            .filter(|amount| amount.is_finite() && *amount > 0.0)
            .unwrap_or(DEFAULT_FUNDING_AMOUNT)
    }
}

/// Canonical funding stage label
///
/// Labels outside the canonical set are kept verbatim in `Other` and never
/// compare equal to a canonical stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FundingStage {
    PreSeed,
    Seed,
    SeriesA,
    SeriesB,
    Growth,
    Other(String),
}

impl FundingStage {
    pub fn as_str(&self) -> &str {
        match self {
            FundingStage::PreSeed => "Pre-Seed",
            FundingStage::Seed => "Seed",
            FundingStage::SeriesA => "Series A",
            FundingStage::SeriesB => "Series B",
            FundingStage::Growth => "Growth",
            FundingStage::Other(label) => label,
        }
    }
}

impl Default for FundingStage {
    fn default() -> Self {
        FundingStage::Other(String::new())
    }
}

impl From<&str> for FundingStage {
    fn from(label: &str) -> Self {
        match label {
            "Pre-Seed" => FundingStage::PreSeed,
            "Seed" => FundingStage::Seed,
            "Series A" => FundingStage::SeriesA,
            "Series B" => FundingStage::SeriesB,
            "Growth" => FundingStage::Growth,
            other => FundingStage::Other(other.to_string()),
        }
    }
}

impl From<String> for FundingStage {
    fn from(label: String) -> Self {
        match FundingStage::from(label.as_str()) {
            FundingStage::Other(_) => FundingStage::Other(label),
            stage => stage,
        }
    }
}

impl From<FundingStage> for String {
    fn from(stage: FundingStage) -> Self {
        match stage {
            FundingStage::Other(label) => label,
            stage => stage.as_str().to_string(),
        }
    }
}

impl fmt::Display for FundingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capital category a fund label can indicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundCategory {
    #[serde(rename = "Venture Capital")]
    VentureCapital,
    Crowdfunding,
}

impl FundCategory {
    pub fn label(self) -> &'static str {
        match self {
            FundCategory::VentureCapital => "Venture Capital",
            FundCategory::Crowdfunding => "Crowdfunding",
        }
    }

    /// Whether the fund label names this category (case-sensitive)
    #[inline]
    pub fn is_indicated_by(self, fund_name: &str) -> bool {
        fund_name.contains(self.label())
    }

    /// Presentation category for a fund label; anything that is not
    /// crowdfunding is listed as venture capital
    pub fn classify(fund_name: &str) -> Self {
        if FundCategory::Crowdfunding.is_indicated_by(fund_name) {
            FundCategory::Crowdfunding
        } else {
            FundCategory::VentureCapital
        }
    }
}

impl fmt::Display for FundCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Funding offer record as stored by the opportunity repository
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundingOpportunity {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "startupName")]
    pub startup_name: String,
    #[serde(rename = "fundName", default)]
    pub fund_name: String,
    #[serde(default)]
    pub stage: FundingStage,
    #[serde(default)]
    pub sector: String,
    #[serde(rename = "amountEur", default)]
    pub amount_eur: f64,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Scored recommendation for one opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    #[serde(rename = "fundName")]
    pub fund_name: String,
    pub stage: FundingStage,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "fundingAmount")]
    pub funding_amount: i64,
    pub sector: String,
    pub year: Option<i32>,
}

/// Points awarded by each scoring criterion at full match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub sector: f64,
    pub funding_type: f64,
    pub amount: f64,
    pub stage: f64,
}

impl ScoringWeights {
    pub const SECTOR: f64 = 40.0;
    pub const FUNDING_TYPE: f64 = 20.0;
    pub const AMOUNT: f64 = 25.0;
    pub const STAGE: f64 = 15.0;

    /// Score of a perfect match under these weights
    pub fn max_score(&self) -> f64 {
        self.sector + self.funding_type + self.amount + self.stage
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            sector: Self::SECTOR,
            funding_type: Self::FUNDING_TYPE,
            amount: Self::AMOUNT,
            stage: Self::STAGE,
        }
    }
}

/// Forgiving deserializers for user-supplied numbers
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        let parsed = value.and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        });
        Ok(parsed.filter(|n| n.is_finite()))
    }
}
