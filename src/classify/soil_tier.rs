//! Soil Tier Classification
//!
//! 3-tier grouping of free-text soil descriptions by water-retention behaviour.
//! Rules are evaluated in order and the first rule with a matching keyword wins,
//! so "Black Cotton Soil (sandy patches)" is Heavy, not Light.

use serde::{Deserialize, Serialize};

/// Soil tier groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilTier {
    /// Black / clay soils. High retention, slow drainage
    Heavy,

    /// Loams and anything unrecognised
    Medium,

    /// Red / sandy soils. Low retention, fast drainage
    Light,
}

/// One row of the ordered keyword rule table
#[derive(Debug, Clone, Copy)]
pub struct SoilRule {
    pub tier: SoilTier,
    pub keywords: &'static [&'static str],
}

/// Ordered rule table. Heavy is checked before Light.
pub static SOIL_RULES: &[SoilRule] = &[
    SoilRule { tier: SoilTier::Heavy, keywords: &["black", "heavy", "clay"] },
    SoilRule { tier: SoilTier::Light, keywords: &["red", "light", "sandy"] },
    SoilRule { tier: SoilTier::Medium, keywords: &["medium"] },
];

impl SoilTier {
    /// Classify free soil text. Empty or absent text resolves to Medium.
    pub fn classify(raw: Option<&str>) -> Self {
        let text = match raw {
            Some(t) => t.to_lowercase(),
            None => return SoilTier::Medium,
        };

        SOIL_RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| text.contains(kw)))
            .map(|rule| rule.tier)
            .unwrap_or(SoilTier::Medium)
    }

    /// Tier implied by a single crop soil-affinity keyword.
    ///
    /// Only the heavy and light keyword sets carry a tier; "Medium" and
    /// other affinities return None and can only match through the raw text.
    pub fn of_keyword(keyword: &str) -> Option<Self> {
        let kw = keyword.trim().to_lowercase();
        SOIL_RULES
            .iter()
            .filter(|rule| rule.tier != SoilTier::Medium)
            .find(|rule| rule.keywords.contains(&kw.as_str()))
            .map(|rule| rule.tier)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilTier::Heavy => "heavy",
            SoilTier::Medium => "medium",
            SoilTier::Light => "light",
        }
    }
}
