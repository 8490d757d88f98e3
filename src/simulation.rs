//! Water Balance Simulator ("cone of uncertainty")
//!
//! Projects the field's water balance month by month under three rainfall
//! scenarios drawn from historical percentiles:
//!
//! | scenario | rainfall | consumption |
//! |----------|----------|-------------|
//! | worst    | q20      | x1.2 (neighbouring extraction) |
//! | likely   | q50      | x1.0 |
//! | best     | q80      | x0.9 (efficient use) |
//!
//! Monthly consumption = crop water need / active growing months.
//! Balances are clamped at zero after every month and the clamped value is
//! carried forward.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::knowledge::{CropKnowledgeBase, MONTH_LABELS};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Months over which the crop draws its whole-cycle need
    pub active_growing_months: f64,
    pub worst_usage_factor: f64,
    pub likely_usage_factor: f64,
    pub best_usage_factor: f64,
    /// Number of months projected
    pub horizon_months: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            active_growing_months: 5.0,
            worst_usage_factor: 1.2,
            likely_usage_factor: 1.0,
            best_usage_factor: 0.9,
            horizon_months: 6,
        }
    }
}

/// One projected month (mm, clamped and truncated)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationPoint {
    pub month: &'static str,
    pub worst: u32,
    pub likely: u32,
    pub best: u32,
}

#[derive(Debug, Clone)]
pub struct WaterBalanceSimulator {
    kb: Arc<CropKnowledgeBase>,
    params: SimulationParams,
}

impl WaterBalanceSimulator {
    pub fn new(kb: Arc<CropKnowledgeBase>, params: SimulationParams) -> Self {
        Self { kb, params }
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Monthly draw at the likely usage factor (mm)
    pub fn monthly_consumption(&self, crop_name: &str) -> f64 {
        self.kb.water_need_mm(crop_name) as f64 / self.params.active_growing_months
    }

    /// Project `horizon_months` starting at `start_month` (1 = January,
    /// wraps modulo 12). Each call is independent.
    pub fn simulate(&self, crop_name: &str, initial_balance_mm: f64, start_month: u32) -> Vec<SimulationPoint> {
        let p = &self.params;
        let usage = self.monthly_consumption(crop_name);
        let start_idx = (start_month as usize + 11) % 12;

        let mut worst = initial_balance_mm;
        let mut likely = initial_balance_mm;
        let mut best = initial_balance_mm;

        (0..p.horizon_months)
            .map(|i| {
                let idx = (start_idx + i) % 12;
                let rain = self.kb.rainfall(idx);

                worst = (worst + rain.q20 - usage * p.worst_usage_factor).max(0.0);
                likely = (likely + rain.q50 - usage * p.likely_usage_factor).max(0.0);
                best = (best + rain.q80 - usage * p.best_usage_factor).max(0.0);

                SimulationPoint {
                    month: MONTH_LABELS[idx],
                    worst: worst as u32,
                    likely: likely as u32,
                    best: best as u32,
                }
            })
            .collect()
    }
}
