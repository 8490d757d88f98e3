//! Field Advisor
//!
//! Single entry point that wires the engine components over one shared
//! knowledge base:
//!
//! ```text
//! EngineConfig ─┬─> CropScoringEngine      (ranked recommendations)
//!               ├─> ViabilityChecker       (single-crop verdict)
//!               ├─> WaterBalanceSimulator  (6-month cone)
//!               └─> WaterBalanceParams     (30-day rain -> balance)
//! ```
//!
//! `water_report` assembles the full advisory report from values the caller
//! has already fetched (rainfall, soil description, forecast days).

use std::sync::Arc;

use serde::Serialize;

use crate::classify::{Season, SoilTier, WaterTier};
use crate::config::EngineConfig;
use crate::forecast::{DailyForecast, ForecastSummary};
use crate::knowledge::{CropKnowledgeBase, CropProfile, SoilCategory};
use crate::scoring::{CropScoringEngine, FieldConditions, ScoredRecommendation};
use crate::simulation::{SimulationPoint, WaterBalanceSimulator};
use crate::viability::{ViabilityChecker, ViabilityVerdict};
use crate::water_balance::soil_profile;

/// Full water advisory for one field
#[derive(Debug, Clone, Serialize)]
pub struct WaterReport {
    /// Estimated balance, truncated to whole mm
    pub available_water_mm: u32,
    pub status: WaterTier,
    pub soil_tier: SoilTier,
    pub soil_advice: &'static str,
    pub season: Season,
    pub smart_recommendations: Vec<ScoredRecommendation>,
    /// Names only, in ranking order
    pub recommended_crops: Vec<&'static str>,
    pub forecast: Vec<DailyForecast>,
    pub forecast_summary: ForecastSummary,
    pub forecast_advice: &'static str,
    /// Headline: "Water Balance: {mm}mm. {soil advice}"
    pub advice: String,
}

#[derive(Debug, Clone)]
pub struct FieldAdvisor {
    kb: Arc<CropKnowledgeBase>,
    config: EngineConfig,
    scorer: CropScoringEngine,
    checker: ViabilityChecker,
    simulator: WaterBalanceSimulator,
}

impl FieldAdvisor {
    pub fn new(kb: Arc<CropKnowledgeBase>, config: EngineConfig) -> Self {
        Self {
            scorer: CropScoringEngine::new(Arc::clone(&kb), config.scoring),
            checker: ViabilityChecker::new(Arc::clone(&kb)),
            simulator: WaterBalanceSimulator::new(Arc::clone(&kb), config.simulation),
            kb,
            config,
        }
    }

    /// Builtin tables with the shipped calibration
    pub fn builtin() -> Self {
        Self::new(Arc::new(CropKnowledgeBase::builtin()), EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn crops(&self) -> &'static [CropProfile] {
        self.kb.crops()
    }

    pub fn soils(&self) -> &'static [SoilCategory] {
        self.kb.soils()
    }

    // ========================================================================
    // Engine operations
    // ========================================================================

    pub fn estimate_water_balance(&self, rain_last_30d_mm: f64) -> f64 {
        self.config.water_balance.estimate(rain_last_30d_mm)
    }

    pub fn recommend(&self, conditions: &FieldConditions) -> Vec<ScoredRecommendation> {
        self.scorer.recommend(conditions)
    }

    pub fn recommend_batch(&self, batch: &[FieldConditions]) -> Vec<Vec<ScoredRecommendation>> {
        self.scorer.recommend_batch(batch)
    }

    pub fn check_viability(
        &self,
        crop_name: &str,
        available_mm: f64,
        soil_text: Option<&str>,
        season: Season,
        forecast: Option<&ForecastSummary>,
    ) -> ViabilityVerdict {
        self.checker.check(crop_name, available_mm, soil_text, season, forecast)
    }

    pub fn simulate(&self, crop_name: &str, initial_balance_mm: f64, start_month: u32) -> Vec<SimulationPoint> {
        self.simulator.simulate(crop_name, initial_balance_mm, start_month)
    }

    /// Assemble the advisory report for one field.
    ///
    /// Absent or blank soil text is scored as "Medium"; the soil advice
    /// then reports standard irrigation.
    pub fn water_report(
        &self,
        rain_last_30d_mm: f64,
        soil_text: Option<&str>,
        season: Season,
        forecast_days: &[DailyForecast],
    ) -> WaterReport {
        let balance = self.estimate_water_balance(rain_last_30d_mm);
        let status = WaterTier::classify(balance);
        let (soil_tier, soil_advice) = soil_profile(soil_text);

        let smart_recommendations = self
            .scorer
            .recommend(&FieldConditions::new(soil_text, season.as_str(), status));
        let recommended_crops = smart_recommendations.iter().map(|r| r.name).collect();

        let forecast_summary = ForecastSummary::from_days(forecast_days);

        tracing::debug!(
            "water report: balance={:.1}mm status={} season={} recommendations={} rain={}mm/{}d",
            balance,
            status.display_text(),
            season,
            smart_recommendations.len(),
            forecast_summary.display_total_mm(),
            forecast_summary.rain_days
        );

        WaterReport {
            available_water_mm: balance as u32,
            status,
            soil_tier,
            soil_advice,
            season,
            smart_recommendations,
            recommended_crops,
            forecast: forecast_days.to_vec(),
            forecast_summary,
            forecast_advice: forecast_summary.report_advice(),
            advice: format!("Water Balance: {:.0}mm. {}", balance, soil_advice),
        }
    }
}

impl Default for FieldAdvisor {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rainy_week() -> Vec<DailyForecast> {
        (1..=7)
            .map(|d| DailyForecast {
                date: NaiveDate::from_ymd_opt(2024, 7, d).unwrap(),
                weather_code: 63,
                temp_max: Some(30.0),
                temp_min: Some(24.0),
                rain_mm: if d <= 3 { 12.0 } else { 1.0 },
                wind_kmh: 10.0,
            })
            .collect()
    }

    #[test]
    fn test_report_black_soil_kharif() {
        // 500 + 120.4 - 150 = 470.4 -> Moderate
        let report = FieldAdvisor::builtin().water_report(120.4, Some("Black Soil"), Season::Kharif, &rainy_week());

        assert_eq!(report.available_water_mm, 470);
        assert_eq!(report.status, WaterTier::Moderate);
        assert_eq!(report.soil_tier, SoilTier::Heavy);
        assert_eq!(report.advice, "Water Balance: 470mm. Retains water well. Delay irrigation.");
        assert_eq!(report.recommended_crops.len(), 5);
        assert_eq!(report.recommended_crops[0], "Jowar (Sorghum)");
        assert_eq!(
            report.recommended_crops,
            report.smart_recommendations.iter().map(|r| r.name).collect::<Vec<_>>()
        );

        assert_eq!(report.forecast_summary.rain_days, 3);
        assert_eq!(report.forecast_advice, "Heavy rain expected. Delay sowing.");
        assert_eq!(report.forecast.len(), 7);
    }

    #[test]
    fn test_report_without_soil_or_forecast() {
        let report = FieldAdvisor::builtin().water_report(0.0, None, Season::Rabi, &[]);

        // 350 -> Moderate; scored as Medium soil
        assert_eq!(report.available_water_mm, 350);
        assert_eq!(report.soil_tier, SoilTier::Medium);
        assert_eq!(report.soil_advice, "Standard irrigation.");
        assert!(report.recommended_crops.contains(&"Wheat"));
        assert!(report.forecast_advice.starts_with("Dry week"));
    }

    #[test]
    fn test_report_forecast_advice_prefers_dry_total() {
        let one_wet_day = vec![DailyForecast { rain_mm: 6.0, ..rainy_week()[0].clone() }];
        let report = FieldAdvisor::builtin().water_report(100.0, Some("Medium"), Season::Kharif, &one_wet_day);
        assert_eq!(report.forecast_summary.rain_days, 1);
        assert_eq!(report.forecast_advice, "Dry week ahead. Plan irrigation.");
    }

    #[test]
    fn test_report_blank_soil_matches_medium() {
        let advisor = FieldAdvisor::builtin();
        let medium = advisor.water_report(400.0, Some("Medium"), Season::Rabi, &[]);
        for blank in [None, Some("")] {
            let report = advisor.water_report(400.0, blank, Season::Rabi, &[]);
            assert_eq!(report.recommended_crops, medium.recommended_crops);
            assert_eq!(report.soil_tier, SoilTier::Medium);
            assert_eq!(report.soil_advice, "Standard irrigation.");
        }
    }

    #[test]
    fn test_report_headline_rounds() {
        // 500 + 0.6 - 150 = 350.6: integer field truncates, headline rounds
        let report = FieldAdvisor::builtin().water_report(0.6, Some("Medium"), Season::Zaid, &[]);
        assert_eq!(report.available_water_mm, 350);
        assert!(report.advice.starts_with("Water Balance: 351mm."));
    }

    #[test]
    fn test_config_flows_to_components() {
        let mut config = EngineConfig::default();
        config.scoring.max_results = 2;
        config.simulation.horizon_months = 3;
        config.water_balance.base_groundwater_mm = 0.0;

        let advisor = FieldAdvisor::new(Arc::new(CropKnowledgeBase::builtin()), config);
        let recs = advisor.recommend(&FieldConditions::new(Some("black"), "Kharif", WaterTier::Moderate));
        assert_eq!(recs.len(), 2);
        assert_eq!(advisor.simulate("Wheat", 500.0, 6).len(), 3);
        assert_eq!(advisor.estimate_water_balance(100.0), 0.0);
    }

    #[test]
    fn test_listing() {
        let advisor = FieldAdvisor::default();
        assert_eq!(advisor.soils().len(), 7);
        assert!(advisor.crops().iter().any(|c| c.name == "Cotton"));
    }
}
