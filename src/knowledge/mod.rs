//! Crop Knowledge Base
//!
//! Read-only tables the engine scores against:
//! - `crops.rs` - crop profiles (water need, season, soil affinities)
//! - `seed_costs.rs` - seed / input costs with a fixed fallback
//! - `soils.rs` - regional soil catalogue for listing
//! - `rainfall.rs` - monthly rainfall percentiles for the water simulator
//!
//! Built once at startup and shared (`Arc`) by every engine component.
//! Nothing writes to it after construction.

pub mod crops;
pub mod seed_costs;
pub mod soils;
pub mod rainfall;

pub use crops::{CropProfile, CropType, CROP_TABLE, DEFAULT_WATER_NEED_MM};
pub use seed_costs::{SeedCost, FALLBACK_COST, SEED_COST_TABLE};
pub use soils::{Retention, SoilCategory, SOIL_CATALOGUE};
pub use rainfall::{MonthlyRainfall, MONSOON_RAINFALL, MONTH_LABELS};

use rustc_hash::FxHashMap;

/// Indexed view over the static tables
#[derive(Debug, Clone)]
pub struct CropKnowledgeBase {
    crops: &'static [CropProfile],
    by_name: FxHashMap<&'static str, usize>,
    seed_costs: FxHashMap<&'static str, SeedCost>,
    soils: &'static [SoilCategory],
    rainfall: &'static [MonthlyRainfall; 12],
}

impl CropKnowledgeBase {
    /// Knowledge base over the compiled-in tables
    pub fn builtin() -> Self {
        Self::from_tables(CROP_TABLE, SEED_COST_TABLE, SOIL_CATALOGUE, &MONSOON_RAINFALL)
    }

    /// Build from arbitrary static tables. Table order is preserved and is
    /// the tie-break order for ranking. On duplicate crop names the first
    /// entry wins the name lookup.
    pub fn from_tables(
        crops: &'static [CropProfile],
        seed_costs: &'static [(&'static str, SeedCost)],
        soils: &'static [SoilCategory],
        rainfall: &'static [MonthlyRainfall; 12],
    ) -> Self {
        let mut by_name = FxHashMap::default();
        for (idx, crop) in crops.iter().enumerate() {
            by_name.entry(crop.name).or_insert(idx);
        }

        let seed_costs = seed_costs.iter().copied().collect();

        Self {
            crops,
            by_name,
            seed_costs,
            soils,
            rainfall,
        }
    }

    /// All crop profiles in table order
    pub fn crops(&self) -> &'static [CropProfile] {
        self.crops
    }

    /// Exact-name lookup
    pub fn crop(&self, name: &str) -> Option<&'static CropProfile> {
        self.by_name.get(name).map(|&idx| &self.crops[idx])
    }

    /// Exact-name lookup falling back to `CropProfile::UNKNOWN`
    pub fn crop_or_default(&self, name: &str) -> &'static CropProfile {
        self.crop(name).unwrap_or(&CropProfile::UNKNOWN)
    }

    /// Whole-cycle water need (mm); 500 for unknown crops
    pub fn water_need_mm(&self, name: &str) -> u32 {
        self.crop(name).map_or(DEFAULT_WATER_NEED_MM, |c| c.water_mm)
    }

    /// Seed / input costs; never fails
    pub fn seed_cost(&self, name: &str) -> SeedCost {
        self.seed_costs.get(name).copied().unwrap_or(FALLBACK_COST)
    }

    pub fn soils(&self) -> &'static [SoilCategory] {
        self.soils
    }

    /// Rainfall percentiles for a month index (0 = January, wraps)
    pub fn rainfall(&self, month_idx: usize) -> MonthlyRainfall {
        self.rainfall[month_idx % 12]
    }
}

impl Default for CropKnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let kb = CropKnowledgeBase::builtin();
        let wheat = kb.crop("Wheat").unwrap();
        assert_eq!(wheat.water_mm, 450);
        assert_eq!(wheat.season, "Rabi");
        assert!(kb.crop("wheat").is_none());
    }

    #[test]
    fn test_unknown_crop_defaults() {
        let kb = CropKnowledgeBase::builtin();
        let profile = kb.crop_or_default("UnknownCropXYZ");
        assert_eq!(profile.water_mm, 500);
        assert_eq!(profile.crop_type, CropType::Unknown);
        assert!(profile.soil.is_empty());
        assert!(profile.is_annual());
        assert_eq!(kb.water_need_mm("UnknownCropXYZ"), 500);
    }

    #[test]
    fn test_seed_cost_fallback() {
        let kb = CropKnowledgeBase::builtin();
        assert_eq!(
            kb.seed_cost("Cotton"),
            SeedCost { seed_cost_per_kg: 800, input_cost_per_acre: 25_000 }
        );
        // Papaya has a profile but no cost entry
        assert_eq!(kb.seed_cost("Papaya"), FALLBACK_COST);
        assert_eq!(kb.seed_cost(""), FALLBACK_COST);
    }

    #[test]
    fn test_rainfall_wraps() {
        let kb = CropKnowledgeBase::builtin();
        assert_eq!(kb.rainfall(12), kb.rainfall(0));
        assert_eq!(kb.rainfall(6).q50, 250.0);
    }

    #[test]
    fn test_soil_catalogue_exposed() {
        let kb = CropKnowledgeBase::builtin();
        assert_eq!(kb.soils().len(), 7);
        assert_eq!(kb.crops().len(), CROP_TABLE.len());
    }
}
