//! Crop Water Engine
//!
//! Deterministic water-balance and crop-suitability decisions for
//! smallholder fields:
//! - `classify/`: soil tier, water tier and season from raw inputs
//! - `knowledge/`: static crop, seed-cost, soil and rainfall tables
//! - `scoring/`: soil + water scoring and top-K ranking
//! - `viability.rs`: single-crop feasibility with advisories
//! - `simulation.rs`: 6-month worst / likely / best water projection
//! - `water_balance.rs`: 30-day rain -> balance, soil advice, moisture status
//! - `forecast.rs`: 7-day forecast summary and farm advice
//! - `advisor.rs`: one facade over all of the above, plus the water report
//! - `config.rs`: JSON configuration of every tunable constant
//!
//! All engine operations are pure and total over an immutable knowledge
//! base, so a single `FieldAdvisor` can serve any number of threads.

pub mod classify;
pub mod knowledge;
pub mod scoring;
pub mod viability;
pub mod simulation;
pub mod water_balance;
pub mod forecast;
pub mod config;
pub mod advisor;

// Re-export commonly used types
pub use classify::{Season, SoilTier, WaterTier};
pub use knowledge::{CropKnowledgeBase, CropProfile, CropType, SeedCost, SoilCategory};
pub use scoring::{CropScoringEngine, FieldConditions, ScoreBreakdown, ScoredRecommendation, ScoringCalibration};
pub use viability::{Severity, SoilConflict, ViabilityChecker, ViabilityVerdict};
pub use simulation::{SimulationParams, SimulationPoint, WaterBalanceSimulator};
pub use water_balance::{estimate_water_balance, soil_irrigation_advice, SoilMoistureStatus, WaterBalanceParams};
pub use forecast::{DailyForecast, ForecastSummary};
pub use config::{ConfigError, EngineConfig};
pub use advisor::{FieldAdvisor, WaterReport};
