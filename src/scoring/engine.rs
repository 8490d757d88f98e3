//! Crop Scoring Engine
//!
//! Ranks the knowledge base for a soil / season / water context:
//! season filter -> soil + water terms -> score cutoff -> stable sort -> top K
//! -> cost enrichment.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use smallvec::SmallVec;

use super::breakdown::{score_crop, FieldConditions, ScoreBreakdown};
use super::calibration::ScoringCalibration;
use crate::knowledge::{CropKnowledgeBase, CropProfile, SeedCost};

/// One ranked crop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecommendation {
    pub name: &'static str,
    pub score: i32,
    pub reasons: SmallVec<[&'static str; 2]>,
    pub breakdown: ScoreBreakdown,
    pub details: CropProfile,
    #[serde(flatten)]
    pub costs: SeedCost,
}

#[derive(Debug, Clone)]
pub struct CropScoringEngine {
    kb: Arc<CropKnowledgeBase>,
    calibration: ScoringCalibration,
}

impl CropScoringEngine {
    pub fn new(kb: Arc<CropKnowledgeBase>, calibration: ScoringCalibration) -> Self {
        Self { kb, calibration }
    }

    /// Ranked recommendations, at most `max_results`, non-increasing score.
    /// Ties keep knowledge-base order.
    pub fn recommend(&self, conditions: &FieldConditions) -> Vec<ScoredRecommendation> {
        let cal = &self.calibration;

        let mut kept: Vec<(&'static CropProfile, ScoreBreakdown)> = self
            .kb
            .crops()
            .iter()
            .filter_map(|crop| {
                let breakdown = score_crop(crop, conditions, cal);
                if breakdown.is_none() {
                    tracing::debug!("{} excluded: not a {} crop", crop.name, conditions.season);
                }
                breakdown.map(|b| (crop, b))
            })
            .filter(|(_, b)| b.total() >= cal.min_score)
            .collect();

        // sort_by is stable
        kept.sort_by(|a, b| b.1.total().cmp(&a.1.total()));
        kept.truncate(cal.max_results);

        kept.into_iter()
            .map(|(crop, breakdown)| ScoredRecommendation {
                name: crop.name,
                score: breakdown.total(),
                reasons: breakdown.reasons(),
                breakdown,
                details: *crop,
                costs: self.kb.seed_cost(crop.name),
            })
            .collect()
    }

    /// Score many independent fields in parallel. Output order matches input.
    pub fn recommend_batch(&self, batch: &[FieldConditions]) -> Vec<Vec<ScoredRecommendation>> {
        batch.par_iter().map(|c| self.recommend(c)).collect()
    }
}
