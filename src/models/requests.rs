use serde::{Deserialize, Serialize};

/// Query parameters for the funding listing endpoint
///
/// Each filter is optional; the literal value `all` disables it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundingQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
}
