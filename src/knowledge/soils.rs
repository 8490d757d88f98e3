//! Regional soil catalogue, exposed read-only for listing.

use serde::Serialize;

use crate::classify::SoilTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Retention {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SoilCategory {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub tier: SoilTier,
    pub retention: Retention,
    #[serde(rename = "desc")]
    pub description: &'static str,
}

pub static SOIL_CATALOGUE: &[SoilCategory] = &[
    SoilCategory {
        name: "Black Soil (Regur/Kali) - Heavy",
        tier: SoilTier::Heavy,
        retention: Retention::High,
        description: "High water retention. Good for Cotton, Sugarcane.",
    },
    SoilCategory {
        name: "Red Soil (Lal) - Light",
        tier: SoilTier::Light,
        retention: Retention::Low,
        description: "Porous, low retention. Good for Groundnut, Millets.",
    },
    SoilCategory {
        name: "Medium Soil (Loam/Domat) - Balanced",
        tier: SoilTier::Medium,
        retention: Retention::Medium,
        description: "Balanced moisture. Good for Vegetables, Wheat, Pulses.",
    },
    SoilCategory {
        name: "Alluvial Soil (Zalod) - Fertile",
        tier: SoilTier::Medium,
        retention: Retention::Medium,
        description: "Very fertile river soil. Great for Rice, Wheat.",
    },
    SoilCategory {
        name: "Laterite Soil (Jambhi) - Acidic",
        tier: SoilTier::Light,
        retention: Retention::Low,
        description: "Iron-rich, rocky. Good for Cashew, Mango.",
    },
    SoilCategory {
        name: "Clay Soil (Chikani) - Very Heavy",
        tier: SoilTier::Heavy,
        retention: Retention::VeryHigh,
        description: "Holds water too long. Risk of root rot if not drained.",
    },
    SoilCategory {
        name: "Sandy Soil (Retili) - Very Light",
        tier: SoilTier::Light,
        retention: Retention::VeryLow,
        description: "Drains instantly. Needs frequent irrigation. Good for Melons.",
    },
];
