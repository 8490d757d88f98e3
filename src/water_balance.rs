//! Water Balance Estimation
//!
//! Turns already-fetched field observations into the quantities the engine
//! scores against:
//! - 30-day rainfall -> available water balance (mm)
//! - soil description -> irrigation advice
//! - sensor soil moisture (m³/m³) -> moisture status

use serde::{Deserialize, Serialize};

use crate::classify::SoilTier;

/// Bucket-model constants for the balance estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterBalanceParams {
    /// Groundwater assumed present before recent rain (mm)
    pub base_groundwater_mm: f64,

    /// Evaporation loss over the same window (mm)
    pub evaporation_loss_mm: f64,
}

impl Default for WaterBalanceParams {
    fn default() -> Self {
        Self {
            base_groundwater_mm: 500.0,
            evaporation_loss_mm: 150.0,
        }
    }
}

impl WaterBalanceParams {
    /// Available water (mm) given the last 30 days of rain. Never negative.
    pub fn estimate(&self, rain_last_30d_mm: f64) -> f64 {
        (self.base_groundwater_mm + rain_last_30d_mm - self.evaporation_loss_mm).max(0.0)
    }
}

/// Balance estimate with the default bucket constants
pub fn estimate_water_balance(rain_last_30d_mm: f64) -> f64 {
    WaterBalanceParams::default().estimate(rain_last_30d_mm)
}

/// Irrigation advice for a free-text soil description.
///
/// Only the heavy and light keyword sets are consulted, so "Medium" and
/// unrecognised soils get the standard advice.
pub fn soil_irrigation_advice(soil_text: Option<&str>) -> &'static str {
    match soil_text.map(|s| s.to_lowercase()) {
        Some(s) if s.contains("black") || s.contains("clay") => "Retains water well. Delay irrigation.",
        Some(s) if s.contains("sandy") || s.contains("light") => "Drains fast. Frequent light irrigation.",
        _ => "Standard irrigation.",
    }
}

/// Soil tier together with its irrigation advice
pub fn soil_profile(soil_text: Option<&str>) -> (SoilTier, &'static str) {
    (SoilTier::classify(soil_text), soil_irrigation_advice(soil_text))
}

// ============================================================================
// Soil moisture
// ============================================================================

const DRY_BELOW_PCT: f64 = 15.0;
const OPTIMAL_BELOW_PCT: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoistureLevel {
    Dry,
    Optimal,
    Saturated,
}

impl MoistureLevel {
    pub fn display_text(&self) -> &'static str {
        match self {
            MoistureLevel::Dry => "Dry - Needs Irrigation",
            MoistureLevel::Optimal => "Optimal Moisture",
            MoistureLevel::Saturated => "Saturated / Wet",
        }
    }
}

/// Moisture reading as a percentage plus its status band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilMoistureStatus {
    pub moisture_percent: f64,
    pub level: MoistureLevel,
}

impl SoilMoistureStatus {
    pub fn from_percent(moisture_percent: f64) -> Self {
        let level = if moisture_percent < DRY_BELOW_PCT {
            MoistureLevel::Dry
        } else if moisture_percent < OPTIMAL_BELOW_PCT {
            MoistureLevel::Optimal
        } else {
            MoistureLevel::Saturated
        };
        Self { moisture_percent, level }
    }

    /// From a volumetric sensor reading (m³/m³); the percentage is rounded
    /// to one decimal before banding.
    pub fn from_volumetric(m3_per_m3: f64) -> Self {
        Self::from_percent((m3_per_m3 * 1000.0).round() / 10.0)
    }

    pub fn needs_irrigation(&self) -> bool {
        self.level == MoistureLevel::Dry
    }
}
