//! Crop Recommendation Scoring
//!
//! - `calibration.rs` - named scoring constants (`FIELD_ADVISOR`)
//! - `breakdown.rs` - pure per-crop soil + water sub-scores
//! - `engine.rs` - ranking over the knowledge base

pub mod calibration;
pub mod breakdown;
pub mod engine;

pub use calibration::ScoringCalibration;
pub use breakdown::{score_crop, FieldConditions, ScoreBreakdown, SoilTerm, WaterTerm};
pub use engine::{CropScoringEngine, ScoredRecommendation};
