//! Seed and input cost table (INR).
//!
//! Seed cost is per kg (per cutting for sugarcane, per sapling for fruit);
//! input cost is per acre. Crops missing from the table get `FALLBACK_COST`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedCost {
    pub seed_cost_per_kg: u32,
    pub input_cost_per_acre: u32,
}

pub const FALLBACK_COST: SeedCost = SeedCost {
    seed_cost_per_kg: 100,
    input_cost_per_acre: 15_000,
};

const fn cost(seed: u32, input: u32) -> SeedCost {
    SeedCost { seed_cost_per_kg: seed, input_cost_per_acre: input }
}

pub static SEED_COST_TABLE: &[(&str, SeedCost)] = &[
    // Cereals
    ("Rice (Paddy)", cost(80, 18_000)),
    ("Wheat", cost(45, 12_000)),
    ("Jowar (Sorghum)", cost(60, 8_000)),
    ("Bajra (Pearl Millet)", cost(50, 7_000)),
    ("Maize (Corn)", cost(350, 15_000)),
    ("Ragi (Finger Millet)", cost(70, 9_000)),

    // Pulses
    ("Tur (Arhar/Pigeon Pea)", cost(120, 10_000)),
    ("Gram (Chana/Chickpea)", cost(80, 9_000)),
    ("Moong (Green Gram)", cost(150, 8_000)),
    ("Urad (Black Gram)", cost(140, 8_500)),

    // Cash crops
    ("Sugarcane", cost(5, 45_000)),
    ("Cotton", cost(800, 25_000)),
    ("Soybean", cost(90, 12_000)),
    ("Groundnut", cost(120, 15_000)),
    ("Sunflower", cost(200, 11_000)),
    ("Mustard", cost(100, 8_000)),

    // Vegetables
    ("Onion", cost(1_500, 35_000)),
    ("Potato", cost(35, 40_000)),
    ("Tomato", cost(2_500, 50_000)),
    ("Brinjal (Eggplant)", cost(3_000, 45_000)),
    ("Okra (Bhindi)", cost(800, 25_000)),
    ("Cabbage", cost(2_000, 35_000)),

    // Fruits
    ("Mango", cost(150, 80_000)),
    ("Banana", cost(25, 60_000)),
    ("Grapes", cost(50, 150_000)),
    ("Pomegranate", cost(100, 100_000)),
    ("Orange", cost(80, 70_000)),
];
