//! Whole-script metrics folded from per-scene data.
//!
//! All aggregates return zero for an empty script.

use reel_core::{Complexity, Scene, SceneStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{feasibility, percent, round_to};

/// Audience appeal split, as integer percentages of the scene count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appeal {
    /// Share of action, stunt and song scenes.
    pub mass: u32,
    /// Share of dialogue and romantic scenes.
    pub class: u32,
}

fn share(scenes: &[Scene], kinds: &[Complexity]) -> u32 {
    let hits = scenes
        .iter()
        .filter(|s| kinds.contains(&s.complexity))
        .count();
    percent(hits, scenes.len())
}

pub fn mass_appeal(scenes: &[Scene]) -> u32 {
    share(
        scenes,
        &[Complexity::Action, Complexity::Stunt, Complexity::Song],
    )
}

pub fn class_appeal(scenes: &[Scene]) -> u32 {
    share(scenes, &[Complexity::Dialogue, Complexity::Romantic])
}

pub fn appeal(scenes: &[Scene]) -> Appeal {
    Appeal {
        mass: mass_appeal(scenes),
        class: class_appeal(scenes),
    }
}

/// Script health out of 100, with its three components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptHealth {
    /// Up to 40 points for completed scenes.
    pub completion: f64,
    /// Up to 30 points, falling by 10 per 50 crore of total cost.
    pub budget_efficiency: f64,
    /// Up to 30 points for scenes with no outstanding VFX.
    pub vfx_readiness: f64,
    /// Sum of the components, rounded.
    pub score: u32,
}

pub fn script_health(scenes: &[Scene]) -> ScriptHealth {
    if scenes.is_empty() {
        return ScriptHealth::default();
    }
    let total = scenes.len() as f64;
    let completed = scenes
        .iter()
        .filter(|s| s.status == SceneStatus::Completed)
        .count() as f64;
    let total_cost: f64 = scenes.iter().map(Scene::cost_f64).sum();
    let vfx_ready = scenes
        .iter()
        .filter(|s| !s.vfx_required || s.status == SceneStatus::Completed)
        .count() as f64;

    let completion = 40.0 * completed / total;
    let budget_efficiency = (30.0 - (total_cost / 50.0) * 10.0).max(0.0);
    let vfx_readiness = 30.0 * vfx_ready / total;
    if budget_efficiency == 0.0 {
        debug!(total_cost, "budget efficiency exhausted");
    }
    let score = (completion + budget_efficiency + vfx_readiness).round() as u32;
    debug!(
        scenes = scenes.len(),
        completion,
        budget_efficiency,
        vfx_readiness,
        score,
        "script health"
    );
    ScriptHealth {
        completion,
        budget_efficiency,
        vfx_readiness,
        score,
    }
}

/// VFX load of the script in [0, 100]: tier index of every VFX scene
/// (low = 0 .. extreme = 3) relative to every scene being extreme.
pub fn vfx_intensity_score(scenes: &[Scene]) -> u32 {
    if scenes.is_empty() {
        return 0;
    }
    let tiers: usize = scenes
        .iter()
        .filter_map(Scene::effective_vfx_intensity)
        .map(|t| t.index())
        .sum();
    (100.0 * tiers as f64 / (3.0 * scenes.len() as f64)).round() as u32
}

/// Mean canonical feasibility, rounded to one decimal. Zero for no scenes.
pub fn mean_feasibility(scenes: &[Scene]) -> f64 {
    if scenes.is_empty() {
        return 0.0;
    }
    let sum: f64 = scenes.iter().map(feasibility).sum();
    round_to(sum / scenes.len() as f64, 1)
}
