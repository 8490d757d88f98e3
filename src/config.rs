//! Engine Configuration
//!
//! One JSON document groups every tunable constant. Missing sections and
//! missing fields fall back to the shipped defaults:
//!
//! ```json
//! {
//!   "scoring":       { "min_score": 50, "max_results": 5 },
//!   "simulation":    { "active_growing_months": 5.0, "horizon_months": 6 },
//!   "water_balance": { "base_groundwater_mm": 500.0 }
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::ScoringCalibration;
use crate::simulation::SimulationParams;
use crate::water_balance::WaterBalanceParams;

/// Rejected configuration values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("scoring.max_results must be at least 1")]
    ZeroResultCap,
    #[error("simulation.active_growing_months must be positive, got {0}")]
    NonPositiveGrowingWindow(f64),
    #[error("simulation.{0} must not be negative, got {1}")]
    NegativeUsageFactor(&'static str, f64),
    #[error("simulation.horizon_months must be at least 1")]
    ZeroHorizon,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringCalibration,
    pub simulation: SimulationParams,
    pub water_balance: WaterBalanceParams,
}

impl EngineConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {:?}", path))?;

        let config: EngineConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse engine config JSON")?;

        config
            .validate()
            .with_context(|| format!("Invalid engine config: {:?}", path))?;

        tracing::debug!("Loaded engine config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scoring.max_results == 0 {
            return Err(ConfigError::ZeroResultCap);
        }

        let sim = &self.simulation;
        // NaN fails this check too
        if !(sim.active_growing_months > 0.0) {
            return Err(ConfigError::NonPositiveGrowingWindow(sim.active_growing_months));
        }
        for (name, factor) in [
            ("worst_usage_factor", sim.worst_usage_factor),
            ("likely_usage_factor", sim.likely_usage_factor),
            ("best_usage_factor", sim.best_usage_factor),
        ] {
            if factor < 0.0 {
                return Err(ConfigError::NegativeUsageFactor(name, factor));
            }
        }
        if sim.horizon_months == 0 {
            return Err(ConfigError::ZeroHorizon);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.scoring, ScoringCalibration::FIELD_ADVISOR);
        assert_eq!(config.simulation.horizon_months, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "scoring": { "max_results": 3 }, "water_balance": { "evaporation_loss_mm": 200.0 } }"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.scoring.max_results, 3);
        assert_eq!(config.scoring.min_score, 50);
        assert_relative_eq!(config.water_balance.evaporation_loss_mm, 200.0);
        assert_relative_eq!(config.water_balance.base_groundwater_mm, 500.0);
        assert_relative_eq!(config.simulation.worst_usage_factor, 1.2);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = EngineConfig::default();
        config.scoring.max_results = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroResultCap));

        let mut config = EngineConfig::default();
        config.simulation.active_growing_months = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveGrowingWindow(0.0)));

        let mut config = EngineConfig::default();
        config.simulation.best_usage_factor = -0.1;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeUsageFactor("best_usage_factor", -0.1))
        );

        let mut config = EngineConfig::default();
        config.simulation.horizon_months = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroHorizon));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("crop_water_engine_cfg_{}.json", std::process::id()));
        fs::write(&path, r#"{ "simulation": { "horizon_months": 12 } }"#).unwrap();
        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.simulation.horizon_months, 12);

        fs::write(&path, r#"{ "simulation": { "horizon_months": 0 } }"#).unwrap();
        let err = EngineConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid engine config"));
        fs::remove_file(&path).unwrap();

        assert!(EngineConfig::load(Path::new("/nonexistent/engine.json")).is_err());
    }
}
