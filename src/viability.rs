//! Single-crop Viability Check
//!
//! Water feasibility plus the two hard soil conflicts (clay crop on light
//! soil, sandy crop on heavy soil), followed by seasonal and forecast
//! advisories. Advisories never change the feasibility verdict.

use std::sync::Arc;

use serde::Serialize;

use crate::classify::Season;
use crate::forecast::ForecastSummary;
use crate::knowledge::{CropKnowledgeBase, CropProfile, CropType};

/// Forecast advisory thresholds
const HEAVY_RAIN_DAYS: u32 = 3;
const DRY_WEEK_MM: f64 = 5.0;
const PULSE_EXCESS_RAIN_MM: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Safe,
    Critical,
}

/// Hard soil conflict between a crop's affinity and the field's soil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoilConflict {
    /// Clay-loving crop on light / sandy soil
    NeedsHeavy,
    /// Sandy-soil crop on heavy / clay soil
    NeedsLight,
}

impl SoilConflict {
    /// Detect a conflict. Absent soil text or a crop without affinities
    /// is assumed compatible.
    pub fn detect(crop: &CropProfile, soil_text: Option<&str>) -> Option<Self> {
        let soil = soil_text?.to_lowercase();
        if crop.soil.is_empty() {
            return None;
        }

        if crop.has_soil_affinity("clay") && (soil.contains("sandy") || soil.contains("light")) {
            Some(SoilConflict::NeedsHeavy)
        } else if crop.has_soil_affinity("sandy") && (soil.contains("clay") || soil.contains("heavy")) {
            Some(SoilConflict::NeedsLight)
        } else {
            None
        }
    }

    pub fn message(&self, crop_name: &str) -> String {
        match self {
            SoilConflict::NeedsHeavy => {
                format!("{} needs Heavy/Clay soil, but you have Light soil.", crop_name)
            }
            SoilConflict::NeedsLight => {
                format!("{} needs Light/Sandy soil, avoiding waterlogging.", crop_name)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViabilityVerdict {
    pub crop_name: String,
    pub feasible: bool,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,
    pub needed_mm: u32,
    pub available_mm: f64,
    /// needed - available; negative means surplus
    pub shortfall_mm: f64,
    pub soil_conflict: Option<SoilConflict>,
    pub advisories: Vec<String>,
    /// Profile the verdict was computed from; the synthesised default for
    /// unknown crops
    pub profile: CropProfile,
    /// Table profile, null when the crop is not in the table
    pub crop_details: Option<CropProfile>,
}

#[derive(Debug, Clone)]
pub struct ViabilityChecker {
    kb: Arc<CropKnowledgeBase>,
}

impl ViabilityChecker {
    pub fn new(kb: Arc<CropKnowledgeBase>) -> Self {
        Self { kb }
    }

    pub fn check(
        &self,
        crop_name: &str,
        available_mm: f64,
        soil_text: Option<&str>,
        season: Season,
        forecast: Option<&ForecastSummary>,
    ) -> ViabilityVerdict {
        let crop_details = self.kb.crop(crop_name).copied();
        let profile = *self.kb.crop_or_default(crop_name);
        let needed = profile.water_mm;

        let soil_conflict = SoilConflict::detect(&profile, soil_text);
        let water_ok = available_mm >= needed as f64;
        let feasible = water_ok && soil_conflict.is_none();
        let shortfall = needed as f64 - available_mm;

        let mut advisories = Vec::new();
        if let Some(advice) = season_advisory(crop_name, &profile, season) {
            advisories.push(advice);
        }
        if let Some(summary) = forecast {
            if let Some(advice) = weather_advisory(summary, &profile, water_ok) {
                advisories.push(advice.to_string());
            }
        }

        let mut message = if feasible {
            format!(
                "Success! You have {}mm. {} needs approx {}mm.",
                available_mm as i64,
                crop_name,
                needed
            )
        } else if let Some(conflict) = soil_conflict {
            format!("Soil Warning: {}", conflict.message(crop_name))
        } else {
            format!(
                "Not Viable. {} ({}mm) exceeds your water ({}mm) by {}mm.",
                crop_name,
                needed,
                available_mm as i64,
                shortfall as i64
            )
        };
        for advice in &advisories {
            message.push(' ');
            message.push_str(advice);
        }

        tracing::debug!(
            "viability {}: feasible={} needed={} available={} advisories={}",
            crop_name,
            feasible,
            needed,
            available_mm,
            advisories.len()
        );

        ViabilityVerdict {
            crop_name: crop_name.to_string(),
            feasible,
            severity: if feasible { Severity::Safe } else { Severity::Critical },
            message,
            needed_mm: needed,
            available_mm,
            shortfall_mm: shortfall,
            soil_conflict,
            advisories,
            profile,
            crop_details,
        }
    }
}

/// Out-of-season warning for seasonal crops
fn season_advisory(crop_name: &str, profile: &CropProfile, season: Season) -> Option<String> {
    if profile.grows_in(season.as_str()) {
        return None;
    }
    Some(format!(
        "{} is a {} crop, but currently it's {}. Yield may be low.",
        crop_name, profile.season, season
    ))
}

/// First applicable forecast advisory: heavy rain, then dry week for a
/// water-short crop, then excess rain for pulses.
fn weather_advisory(
    summary: &ForecastSummary,
    profile: &CropProfile,
    water_ok: bool,
) -> Option<&'static str> {
    if summary.rain_days >= HEAVY_RAIN_DAYS {
        Some("Heavy rain alert! Delay sowing/spraying.")
    } else if summary.total_rain_mm < DRY_WEEK_MM && !water_ok {
        Some("Dry week ahead. Ensure irrigation is planned.")
    } else if summary.total_rain_mm > PULSE_EXCESS_RAIN_MM && profile.crop_type == CropType::Pulse {
        Some("Excess rain warning for Pulses. Ensure drainage.")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> ViabilityChecker {
        ViabilityChecker::new(Arc::new(CropKnowledgeBase::builtin()))
    }

    #[test]
    fn test_feasible_message() {
        let v = checker().check("Wheat", 620.7, None, Season::Rabi, None);
        assert!(v.feasible);
        assert_eq!(v.severity, Severity::Safe);
        assert_eq!(v.message, "Success! You have 620mm. Wheat needs approx 450mm.");
        assert!(v.shortfall_mm < 0.0);
    }

    #[test]
    fn test_soil_conflict_takes_priority() {
        let v = checker().check("Rice (Paddy)", 200.0, Some("Sandy soil"), Season::Kharif, None);
        assert!(!v.feasible);
        assert_eq!(v.severity, Severity::Critical);
        assert_eq!(v.soil_conflict, Some(SoilConflict::NeedsHeavy));
        assert!(v.message.starts_with("Soil Warning: Rice (Paddy) needs Heavy/Clay soil"));
        assert_eq!(v.shortfall_mm, 1000.0);
    }

    #[test]
    fn test_sandy_crop_on_heavy_soil() {
        let v = checker().check("Groundnut", 900.0, Some("Clay Soil (Chikani)"), Season::Kharif, None);
        assert!(!v.feasible);
        assert_eq!(v.soil_conflict, Some(SoilConflict::NeedsLight));
    }

    #[test]
    fn test_shortfall_message() {
        let v = checker().check("Cotton", 450.5, Some("Black"), Season::Kharif, None);
        assert!(!v.feasible);
        assert_eq!(v.message, "Not Viable. Cotton (700mm) exceeds your water (450mm) by 249mm.");
    }

    #[test]
    fn test_unknown_crop_uses_default_profile() {
        let v = checker().check("UnknownCropXYZ", 1000.0, Some("Sandy"), Season::Zaid, None);
        assert!(v.feasible);
        assert!(v.crop_details.is_none());
        assert_eq!(v.needed_mm, 500);
        assert_eq!(v.profile.crop_type, CropType::Unknown);
        assert!(v.advisories.is_empty());
    }

    #[test]
    fn test_crop_details_serialized() {
        let known = serde_json::to_value(checker().check("Wheat", 500.0, None, Season::Rabi, None)).unwrap();
        assert_eq!(known["crop_details"]["name"], "Wheat");
        assert_eq!(known["crop_details"]["water_mm"], 450);

        let unknown = serde_json::to_value(checker().check("UnknownCropXYZ", 500.0, None, Season::Rabi, None)).unwrap();
        assert!(unknown["crop_details"].is_null());
        assert_eq!(unknown["profile"]["type"], "Unknown");
    }

    #[test]
    fn test_season_advisory_does_not_flip_feasibility() {
        let v = checker().check("Wheat", 800.0, None, Season::Kharif, None);
        assert!(v.feasible);
        assert_eq!(v.advisories.len(), 1);
        assert!(v.message.ends_with("Wheat is a Rabi crop, but currently it's Kharif. Yield may be low."));
    }

    #[test]
    fn test_weather_advisories() {
        let kb = CropKnowledgeBase::builtin();
        let pulse = kb.crop("Moong (Green Gram)").unwrap();

        let heavy = ForecastSummary::new(3, 2.0);
        assert!(weather_advisory(&heavy, pulse, true).unwrap().starts_with("Heavy rain"));

        let dry = ForecastSummary::new(0, 1.0);
        assert!(weather_advisory(&dry, pulse, false).unwrap().starts_with("Dry week"));
        assert!(weather_advisory(&dry, pulse, true).is_none());

        let wet = ForecastSummary::new(2, 35.0);
        assert!(weather_advisory(&wet, pulse, true).unwrap().starts_with("Excess rain"));
        assert!(weather_advisory(&wet, kb.crop("Wheat").unwrap(), true).is_none());
    }

    #[test]
    fn test_advisories_appended_in_order() {
        let forecast = ForecastSummary::new(4, 60.0);
        let v = checker().check("Wheat", 100.0, None, Season::Kharif, Some(&forecast));
        assert_eq!(v.advisories.len(), 2);
        assert!(v.advisories[0].contains("Rabi crop"));
        assert!(v.advisories[1].starts_with("Heavy rain"));
        assert!(v.message.starts_with("Not Viable."));
        assert!(v.message.ends_with("Delay sowing/spraying."));
    }
}
