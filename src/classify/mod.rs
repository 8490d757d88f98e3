//! Input Classification
//!
//! Turns raw caller inputs into the discrete tiers the scoring engine works with.
//!
//! - `soil_tier.rs` - free-text soil description -> heavy / medium / light
//! - `water_tier.rs` - available water (mm) -> Critical / Moderate / Safe
//! - `season.rs` - Kharif / Rabi / Zaid and season-descriptor matching

pub mod soil_tier;
pub mod water_tier;
pub mod season;

pub use soil_tier::{SoilTier, SoilRule, SOIL_RULES};
pub use water_tier::WaterTier;
pub use season::{Season, descriptor_accepts};
