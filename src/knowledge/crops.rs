//! Crop Profiles
//!
//! Static crop table for the Maharashtra / Deccan growing region.
//! Water requirements are whole-cycle totals (mm); soil affinities are
//! keywords matched against soil tiers and raw soil text.

use serde::Serialize;

use crate::classify::season::descriptor_accepts;
use crate::classify::SoilTier;

/// Default water need (mm) for crops missing from the table
pub const DEFAULT_WATER_NEED_MM: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CropType {
    Cereal,
    Millet,
    Pulse,
    Oilseed,
    #[serde(rename = "Cash Crop")]
    CashCrop,
    Vegetable,
    Fruit,
    /// Synthesised profile for a crop not in the table
    Unknown,
}

/// One crop's growing profile. Immutable; loaded once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropProfile {
    pub name: &'static str,

    /// Water need over one growing cycle (mm)
    pub water_mm: u32,

    /// "Kharif", "Rabi", "Zaid", a slash-combination, or "Annual"
    pub season: &'static str,

    #[serde(rename = "type")]
    pub crop_type: CropType,

    /// Soil-affinity keywords ("Clay", "Black", "Sandy", "Medium", "Red", ...)
    pub soil: &'static [&'static str],

    pub sunlight: &'static str,
    pub temperature: &'static str,
    pub climate: &'static str,
}

impl CropProfile {
    /// Profile used when a crop name is not in the table
    pub const UNKNOWN: CropProfile = CropProfile {
        name: "Unknown",
        water_mm: DEFAULT_WATER_NEED_MM,
        season: "Annual",
        crop_type: CropType::Unknown,
        soil: &[],
        sunlight: "Full Sun",
        temperature: "20-30°C",
        climate: "Varied",
    };

    pub fn is_annual(&self) -> bool {
        self.season.eq_ignore_ascii_case("Annual")
    }

    /// Whether the crop can be sown in the given season token
    pub fn grows_in(&self, season: &str) -> bool {
        descriptor_accepts(self.season, season)
    }

    /// Case-insensitive check for a soil-affinity keyword
    pub fn has_soil_affinity(&self, keyword: &str) -> bool {
        self.soil.iter().any(|s| s.eq_ignore_ascii_case(keyword))
    }

    /// Soil tiers implied by this crop's affinity keywords
    pub fn soil_tiers(&self) -> impl Iterator<Item = SoilTier> + '_ {
        self.soil.iter().filter_map(|s| SoilTier::of_keyword(s))
    }
}

macro_rules! crop {
    ($name:expr, $water:expr, $season:expr, $ty:ident, [$($soil:expr),*], $sun:expr, $temp:expr, $climate:expr) => {
        CropProfile {
            name: $name,
            water_mm: $water,
            season: $season,
            crop_type: CropType::$ty,
            soil: &[$($soil),*],
            sunlight: $sun,
            temperature: $temp,
            climate: $climate,
        }
    };
}

// ============================================================================
// EMBEDDED CROP TABLE
// ============================================================================

pub static CROP_TABLE: &[CropProfile] = &[
    // Cereals & Millets
    crop!("Rice (Paddy)", 1200, "Kharif", Cereal, ["Clay", "Heavy"], "Full Sun", "20-35°C", "Humid & Tropical"),
    crop!("Wheat", 450, "Rabi", Cereal, ["Medium", "Heavy"], "Full Sun", "10-25°C", "Cool & Dry"),
    crop!("Jowar (Sorghum)", 400, "Kharif/Rabi", Millet, ["Medium", "Light", "Black"], "Full Sun", "25-35°C", "Hot & Dry"),
    crop!("Bajra (Pearl Millet)", 350, "Kharif", Millet, ["Light", "Sandy"], "Full Sun", "25-35°C", "Hot & Arid"),
    crop!("Maize (Corn)", 500, "Kharif/Rabi", Cereal, ["Medium", "Red"], "Full Sun", "18-27°C", "Warm"),
    crop!("Ragi (Finger Millet)", 350, "Kharif", Millet, ["Red", "Light"], "Full Sun", "20-30°C", "Tropical/Subtropical"),

    // Pulses
    crop!("Tur (Arhar/Pigeon Pea)", 500, "Kharif", Pulse, ["Medium", "Black"], "Full Sun", "25-30°C", "Semi-Arid"),
    crop!("Gram (Chana/Chickpea)", 300, "Rabi", Pulse, ["Medium", "Black"], "Full Sun", "15-25°C", "Cool & Dry"),
    crop!("Moong (Green Gram)", 300, "Kharif/Zaid", Pulse, ["Medium"], "Full Sun", "25-35°C", "Warm"),
    crop!("Urad (Black Gram)", 350, "Kharif", Pulse, ["Medium", "Heavy"], "Full Sun", "25-35°C", "Warm & Humid"),

    // Oilseeds & Cash Crops
    crop!("Sugarcane", 1800, "Annual", CashCrop, ["Heavy", "Black"], "Full Sun", "20-35°C", "Tropical & Humid"),
    crop!("Cotton", 700, "Kharif", CashCrop, ["Black", "Medium"], "Full Sun", "21-30°C", "Warm & Semi-Arid"),
    crop!("Soybean", 500, "Kharif", Oilseed, ["Medium", "Black"], "Full Sun", "20-30°C", "Warm & Moist"),
    crop!("Groundnut", 500, "Kharif", Oilseed, ["Light", "Sandy"], "Full Sun", "25-30°C", "Tropics"),
    crop!("Sunflower", 450, "Kharif/Rabi", Oilseed, ["Medium"], "Full Sun", "20-25°C", "Adaptable"),
    crop!("Mustard", 300, "Rabi", Oilseed, ["Medium", "Light"], "Full Sun", "10-25°C", "Cool"),

    // Vegetables
    crop!("Onion", 500, "Rabi/Kharif", Vegetable, ["Medium", "Light"], "Full Sun", "15-25°C", "Mild"),
    crop!("Potato", 500, "Rabi", Vegetable, ["Medium"], "Full Sun", "15-20°C", "Cool"),
    crop!("Tomato", 600, "Annual", Vegetable, ["Medium", "Red"], "Full Sun", "20-30°C", "Warm"),
    crop!("Brinjal (Eggplant)", 600, "Annual", Vegetable, ["Medium"], "Full Sun", "25-30°C", "Warm"),
    crop!("Okra (Bhindi)", 400, "Kharif/Zaid", Vegetable, ["Medium"], "Full Sun", "22-35°C", "Warm"),
    crop!("Cabbage", 400, "Rabi", Vegetable, ["Medium"], "Part Sun", "15-20°C", "Cool & Moist"),

    // Fruits
    crop!("Banana", 1500, "Annual", Fruit, ["Medium", "Heavy"], "Full Sun", "25-30°C", "Tropical Humid"),
    crop!("Mango", 1000, "Annual", Fruit, ["Medium", "Red"], "Full Sun", "24-30°C", "Tropical"),
    crop!("Grapes", 700, "Annual", Fruit, ["Medium"], "Full Sun", "15-35°C", "Dry/Mediterranean"),
    crop!("Pomegranate", 600, "Annual", Fruit, ["Light", "Red"], "Full Sun", "25-35°C", "Semi-Arid"),
    crop!("Papaya", 1000, "Annual", Fruit, ["Medium"], "Full Sun", "25-30°C", "Tropical"),
];
