//! Whole-script summary and rankings over assembled scene intelligence.

use reel_core::{Scene, SceneStatus};
use reel_score::{Appeal, RiskLevel, ScriptHealth};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::SceneIntelligence;

/// Scenes per safety level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl RiskCounts {
    fn bump(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
            RiskLevel::Critical => self.critical += 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptSummary {
    pub scene_count: usize,
    pub completed_scenes: usize,
    pub total_budget: Decimal,
    pub total_ai_cost: Decimal,
    pub mean_feasibility: f64,
    pub total_estimated_shots: usize,
    pub risk: RiskCounts,
    pub health: ScriptHealth,
    pub appeal: Appeal,
    pub vfx_intensity: u32,
    /// Scene numbers, least feasible first.
    pub hardest_first: Vec<u32>,
    /// Scene numbers, highest safety score first.
    pub riskiest_first: Vec<u32>,
}

pub fn summarize(intel: &[SceneIntelligence]) -> ScriptSummary {
    let scenes: Vec<Scene> = intel.iter().map(|i| i.scene.clone()).collect();
    let mut risk = RiskCounts::default();
    for i in intel {
        risk.bump(i.safety_risk.level);
    }

    let mut hardest: Vec<&SceneIntelligence> = intel.iter().collect();
    hardest.sort_by(|a, b| {
        a.feasibility
            .partial_cmp(&b.feasibility)
            .unwrap_or(Ordering::Equal)
            .then(a.scene.scene_number.cmp(&b.scene.scene_number))
    });
    let mut riskiest: Vec<&SceneIntelligence> = intel.iter().collect();
    riskiest.sort_by(|a, b| {
        b.safety_risk
            .score
            .cmp(&a.safety_risk.score)
            .then(a.scene.scene_number.cmp(&b.scene.scene_number))
    });

    ScriptSummary {
        scene_count: intel.len(),
        completed_scenes: scenes
            .iter()
            .filter(|s| s.status == SceneStatus::Completed)
            .count(),
        total_budget: scenes.iter().map(|s| s.estimated_cost).sum(),
        total_ai_cost: intel.iter().map(|i| i.ai_cost).sum(),
        mean_feasibility: reel_score::mean_feasibility(&scenes),
        total_estimated_shots: intel.iter().map(|i| i.estimated_shots).sum(),
        risk,
        health: reel_score::script_health(&scenes),
        appeal: reel_score::appeal(&scenes),
        vfx_intensity: reel_score::vfx_intensity_score(&scenes),
        hardest_first: hardest.iter().map(|i| i.scene.scene_number).collect(),
        riskiest_first: riskiest.iter().map(|i| i.scene.scene_number).collect(),
    }
}
