//! What-if simulation over a scene collection.
//!
//! A run never touches its input: the base scenes are cloned once and every
//! step works on that private copy. Steps, in order:
//!
//! 1. selected named scenarios, in [`ScenarioId`](crate::ScenarioId) order
//! 2. action cost multiplier and VFX tier scaling
//! 3. song cap, keeping the first songs encountered
//! 4. [`compute_simulation`] over the result

use reel_core::{Complexity, Scene, VfxIntensity, VfxShot};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::params::SimulationParams;
use crate::scenario::{ScenarioCatalog, ScenarioSelection};

/// Hours of footage per shoot day in the shoot-day proxy.
pub const HOURS_PER_SHOOT_DAY: f64 = 8.0;

/// Aggregate metrics of a scene collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub total_cost: Decimal,
    /// Mean canonical feasibility, one decimal.
    pub feasibility: f64,
    pub mass_appeal: u32,
    pub class_appeal: u32,
    /// Σ (ceil(duration / 8) + 1) per scene; a proxy, not the real schedule.
    pub shoot_days: u32,
    pub vfx_shot_count: usize,
    pub scene_count: usize,
}

/// Aggregate metrics for any collection, base or simulated.
pub fn compute_simulation(scenes: &[Scene], vfx_shots: &[VfxShot]) -> SimulationResult {
    if scenes.is_empty() {
        return SimulationResult::default();
    }
    let shoot_days: f64 = scenes
        .iter()
        .map(|s| (s.estimated_duration / HOURS_PER_SHOOT_DAY).ceil() + 1.0)
        .sum();
    SimulationResult {
        total_cost: scenes.iter().map(|s| s.estimated_cost).sum(),
        feasibility: reel_score::mean_feasibility(scenes),
        mass_appeal: reel_score::mass_appeal(scenes),
        class_appeal: reel_score::class_appeal(scenes),
        shoot_days: shoot_days.max(0.0) as u32,
        vfx_shot_count: scenes
            .iter()
            .map(|s| reel_intel::linked_vfx_shots(s, vfx_shots).len())
            .sum(),
        scene_count: scenes.len(),
    }
}

/// Map a VFX tier through the scale: `clamp(round(index · scale), 0, 3)`.
pub fn scale_vfx_tier(tier: VfxIntensity, scale: f64) -> VfxIntensity {
    let scaled = (tier.index() as f64 * scale).round();
    let top = (VfxIntensity::LADDER.len() - 1) as f64;
    let index = if scaled.is_nan() {
        tier.index()
    } else {
        scaled.clamp(0.0, top) as usize
    };
    VfxIntensity::from_index(index)
}

/// Apply the action multiplier and VFX scale in place.
pub fn apply_sliders(scenes: &mut [Scene], params: &SimulationParams) {
    let multiplier = Decimal::from_f64(params.action_multiplier).unwrap_or(Decimal::ONE);
    for s in scenes.iter_mut() {
        if s.complexity.is_action_like() {
            s.estimated_cost *= multiplier;
        }
        if let Some(tier) = s.effective_vfx_intensity() {
            s.vfx_intensity = Some(scale_vfx_tier(tier, params.vfx_scale));
        }
    }
}

/// Drop song scenes from the end until at most `max_songs` remain.
pub fn limit_songs(scenes: &mut Vec<Scene>, max_songs: u8) {
    let mut kept = 0usize;
    let before = scenes.len();
    scenes.retain(|s| {
        if s.complexity != Complexity::Song {
            return true;
        }
        kept += 1;
        kept <= max_songs as usize
    });
    if scenes.len() != before {
        debug!(dropped = before - scenes.len(), max_songs, "song scenes dropped");
    }
}

/// The modified collection for a selection and slider setting.
pub fn simulate_scenes(
    base: &[Scene],
    selection: &ScenarioSelection,
    params: &SimulationParams,
    catalog: &ScenarioCatalog,
) -> Vec<Scene> {
    let mut scenes = base.to_vec();
    catalog.apply(selection, &mut scenes);
    apply_sliders(&mut scenes, params);
    limit_songs(&mut scenes, params.song_count);
    scenes
}

/// A finished run: the modified scenes and their metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub scenes: Vec<Scene>,
    pub result: SimulationResult,
}

pub fn run_simulation(
    base: &[Scene],
    vfx_shots: &[VfxShot],
    selection: &ScenarioSelection,
    params: &SimulationParams,
    catalog: &ScenarioCatalog,
) -> SimulationRun {
    let scenes = simulate_scenes(base, selection, params, catalog);
    let result = compute_simulation(&scenes, vfx_shots);
    debug!(
        scenarios = selection.len(),
        scenes = result.scene_count,
        total_cost = result.total_cost.to_f64().unwrap_or(0.0),
        "simulation run"
    );
    SimulationRun { scenes, result }
}
