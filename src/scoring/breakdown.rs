//! Per-crop Score Breakdown
//!
//! Pure scoring of one crop against one set of field conditions.
//! Total = soil term + water term; each term is computed exactly once.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::calibration::ScoringCalibration;
use crate::classify::{SoilTier, WaterTier};
use crate::knowledge::CropProfile;

pub const REASON_SOIL_MATCH: &str = "Great Soil Match";
pub const REASON_SOIL_TOLERABLE: &str = "Soil Tolerable";
pub const REASON_DROUGHT_RESISTANT: &str = "Drought Resistant";
pub const REASON_TOO_THIRSTY: &str = "Requires too much water";
pub const REASON_WATER_FIT: &str = "Good Water Fit";
pub const REASON_AMPLE_WATER: &str = "Ample Water";

/// Soil text scored when none is given, or only whitespace
pub const DEFAULT_SOIL_TEXT: &str = "Medium";

/// Soil, season and water context for one scoring request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConditions {
    /// Free soil description as entered; None or blank scores as Medium
    pub soil_text: Option<String>,

    /// Season token ("Kharif", "Rabi", "Zaid")
    pub season: String,

    pub water_tier: WaterTier,
}

impl FieldConditions {
    pub fn new(soil_text: Option<&str>, season: &str, water_tier: WaterTier) -> Self {
        Self {
            soil_text: soil_text.map(str::to_string),
            season: season.to_string(),
            water_tier,
        }
    }

    /// Conditions from a water-balance quantity rather than a tier
    pub fn from_balance(soil_text: Option<&str>, season: &str, available_mm: f64) -> Self {
        Self::new(soil_text, season, WaterTier::classify(available_mm))
    }

    /// Soil text the scorer works with
    pub fn scored_soil_text(&self) -> &str {
        self.soil_text
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_SOIL_TEXT)
    }

    pub fn soil_tier(&self) -> SoilTier {
        SoilTier::classify(Some(self.scored_soil_text()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SoilTerm {
    pub matched: bool,
    pub points: i32,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WaterTerm {
    pub points: i32,
    /// None when the tier awards nothing (Moderate tier, thirsty crop)
    pub reason: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub soil: SoilTerm,
    pub water: WaterTerm,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        self.soil.points + self.water.points
    }

    /// Reasons in soil, water order
    pub fn reasons(&self) -> SmallVec<[&'static str; 2]> {
        let mut reasons = SmallVec::new();
        reasons.push(self.soil.reason);
        if let Some(r) = self.water.reason {
            reasons.push(r);
        }
        reasons
    }
}

/// Soil match: one of the crop's keyword tiers equals the caller's tier, or
/// one of the crop's keywords appears in the caller's soil text.
pub fn soil_matches(crop: &CropProfile, tier: SoilTier, soil_text: Option<&str>) -> bool {
    if crop.soil_tiers().any(|t| t == tier) {
        return true;
    }

    let text = match soil_text {
        Some(t) => t.to_lowercase(),
        None => return false,
    };
    crop.soil
        .iter()
        .filter(|kw| !kw.is_empty())
        .any(|kw| text.contains(kw.to_lowercase().as_str()))
}

pub fn soil_term(
    crop: &CropProfile,
    conditions: &FieldConditions,
    calibration: &ScoringCalibration,
) -> SoilTerm {
    let matched = soil_matches(crop, conditions.soil_tier(), Some(conditions.scored_soil_text()));
    if matched {
        SoilTerm { matched, points: calibration.soil_match_points, reason: REASON_SOIL_MATCH }
    } else {
        SoilTerm { matched, points: 0, reason: REASON_SOIL_TOLERABLE }
    }
}

pub fn water_term(crop: &CropProfile, tier: WaterTier, calibration: &ScoringCalibration) -> WaterTerm {
    let need = crop.water_mm;
    match tier {
        WaterTier::Critical if need < calibration.drought_tolerance_mm => WaterTerm {
            points: calibration.critical_bonus,
            reason: Some(REASON_DROUGHT_RESISTANT),
        },
        WaterTier::Critical => WaterTerm {
            points: calibration.critical_penalty,
            reason: Some(REASON_TOO_THIRSTY),
        },
        WaterTier::Moderate if need < calibration.moderate_fit_mm => WaterTerm {
            points: calibration.moderate_bonus,
            reason: Some(REASON_WATER_FIT),
        },
        WaterTier::Moderate => WaterTerm { points: 0, reason: None },
        WaterTier::Safe => WaterTerm {
            points: calibration.safe_bonus,
            reason: Some(REASON_AMPLE_WATER),
        },
    }
}

/// Score one crop. Returns None when the crop is out of season.
pub fn score_crop(
    crop: &CropProfile,
    conditions: &FieldConditions,
    calibration: &ScoringCalibration,
) -> Option<ScoreBreakdown> {
    if !crop.grows_in(&conditions.season) {
        return None;
    }

    Some(ScoreBreakdown {
        soil: soil_term(crop, conditions, calibration),
        water: water_term(crop, conditions.water_tier, calibration),
    })
}
