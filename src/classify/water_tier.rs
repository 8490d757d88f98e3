//! Water Availability Tiers
//!
//! Buckets an available-water quantity (mm) into Critical / Moderate / Safe.
//! Boundaries belong to the upper tier: exactly 300 mm is Moderate and
//! exactly 600 mm is Safe.

use serde::{Deserialize, Serialize};

/// Below this, water is Critical (mm)
pub const CRITICAL_BELOW_MM: f64 = 300.0;

/// Below this (and at or above CRITICAL_BELOW_MM), water is Moderate (mm)
pub const MODERATE_BELOW_MM: f64 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaterTier {
    /// < 300 mm
    Critical,

    /// 300-599 mm
    Moderate,

    /// >= 600 mm
    Safe,
}

impl WaterTier {
    /// Classify an available-water quantity.
    ///
    /// Negative and NaN inputs are treated as very low water.
    pub fn classify(mm: f64) -> Self {
        if mm.is_nan() || mm < CRITICAL_BELOW_MM {
            WaterTier::Critical
        } else if mm < MODERATE_BELOW_MM {
            WaterTier::Moderate
        } else {
            WaterTier::Safe
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            WaterTier::Critical => "Critical",
            WaterTier::Moderate => "Moderate",
            WaterTier::Safe => "Safe",
        }
    }
}
