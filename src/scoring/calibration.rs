//! Scoring Calibration
//!
//! Named constant set for the recommendation scorer. The engine runs with
//! exactly one calibration at a time; `FIELD_ADVISOR` is the shipped one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringCalibration {
    /// Points for a soil match
    pub soil_match_points: i32,

    /// Critical tier: crops needing less than this (mm) earn the drought bonus
    pub drought_tolerance_mm: u32,

    /// Critical tier: bonus for drought-tolerant crops
    pub critical_bonus: i32,

    /// Critical tier: penalty (negative) for thirsty crops
    pub critical_penalty: i32,

    /// Moderate tier: crops needing less than this (mm) earn the fit bonus
    pub moderate_fit_mm: u32,

    /// Moderate tier: bonus for crops under `moderate_fit_mm`
    pub moderate_bonus: i32,

    /// Safe tier: flat bonus for every crop
    pub safe_bonus: i32,

    /// Crops scoring below this are dropped
    pub min_score: i32,

    /// Maximum recommendations returned (K)
    pub max_results: usize,
}

impl ScoringCalibration {
    pub const FIELD_ADVISOR: ScoringCalibration = ScoringCalibration {
        soil_match_points: 40,
        drought_tolerance_mm: 400,
        critical_bonus: 50,
        critical_penalty: -50,
        moderate_fit_mm: 800,
        moderate_bonus: 30,
        safe_bonus: 20,
        min_score: 50,
        max_results: 5,
    };
}

impl Default for ScoringCalibration {
    fn default() -> Self {
        Self::FIELD_ADVISOR
    }
}
