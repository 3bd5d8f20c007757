/// Generic sector keyword present in every resolved set
pub const FALLBACK_SECTOR: &str = "Algemeen";

/// Sector keywords used for industries missing from [`INDUSTRY_SECTORS`]
pub const DEFAULT_SECTORS: &[&str] = &["Technology", FALLBACK_SECTOR];

/// Industry key (lowercase) to relevant sector keywords
const INDUSTRY_SECTORS: &[(&str, &[&str])] = &[
    ("fintech", &["Technology", "FinTech", FALLBACK_SECTOR]),
    ("healthtech", &["Technology", "HealthTech", FALLBACK_SECTOR]),
    ("edtech", &["Technology", "EdTech", FALLBACK_SECTOR]),
    ("iot", &["Technology", "IoT", "Tech", FALLBACK_SECTOR]),
    ("cleantech", &["Technology", "CleanTech", "Duurzaamheid", FALLBACK_SECTOR]),
    ("other", &["Technology", "Tech", FALLBACK_SECTOR, "Innovatie"]),
];

/// Look up the sector keywords for a free-form industry label
///
/// Matching is case-insensitive. Unknown industries resolve to
/// [`DEFAULT_SECTORS`] instead of failing.
pub fn sectors_for_industry(industry: &str) -> &'static [&'static str] {
    let key = industry.trim().to_lowercase();

    INDUSTRY_SECTORS
        .iter()
        .find(|(industry_key, _)| *industry_key == key)
        .map(|(_, sectors)| *sectors)
        .unwrap_or(DEFAULT_SECTORS)
}

/// Resolved sector keywords for one profile, pre-lowercased for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevantSectors {
    keywords: Vec<String>,
}

impl RelevantSectors {
    pub fn resolve(industry: &str) -> Self {
        Self {
            keywords: sectors_for_industry(industry)
                .iter()
                .map(|keyword| keyword.to_lowercase())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if the sector label contains any relevant keyword (case-insensitive)
    #[inline]
    pub fn matches(&self, sector: &str) -> bool {
        if sector.is_empty() {
            return false;
        }

        let sector = sector.to_lowercase();
        self.keywords.iter().any(|keyword| sector.contains(keyword.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_industry_is_case_insensitive() {
        assert_eq!(
            sectors_for_industry("FinTech"),
            &["Technology", "FinTech", "Algemeen"]
        );
        assert_eq!(sectors_for_industry("IOT").len(), 4);
    }

    #[test]
    fn test_unknown_industry_uses_default() {
        assert_eq!(sectors_for_industry("space mining"), DEFAULT_SECTORS);
        assert_eq!(sectors_for_industry(""), DEFAULT_SECTORS);
    }

    #[test]
    fn test_every_set_contains_fallback() {
        for (_, sectors) in INDUSTRY_SECTORS {
            assert!(sectors.contains(&FALLBACK_SECTOR));
        }
        assert!(DEFAULT_SECTORS.contains(&FALLBACK_SECTOR));
    }

    #[test]
    fn test_relevant_sectors_matching() {
        let sectors = RelevantSectors::resolve("healthtech");

        assert!(sectors.matches("HealthTech"));
        assert!(sectors.matches("Medical Technology"));
        assert!(sectors.matches("algemeen"));
        assert!(!sectors.matches("Gaming"));
        assert!(!sectors.matches(""));
    }
}
