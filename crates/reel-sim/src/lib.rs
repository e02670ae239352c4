#![deny(warnings)]

//! What-if production simulation for a script.
//!
//! Named scenarios and continuous sliders transform a private copy of the
//! base scenes; the result is folded into the same aggregate metrics as the
//! baseline and compared metric by metric.

pub mod compare;
pub mod engine;
pub mod params;
pub mod scenario;
pub mod session;

pub use compare::{compare, delta, Comparison, Delta, Direction, Metric, Tone};
pub use engine::{
    apply_sliders, compute_simulation, limit_songs, run_simulation, scale_vfx_tier,
    simulate_scenes, SimulationResult, SimulationRun,
};
pub use params::{ParamError, SimulationParams};
pub use scenario::{
    parse_scenarios, ScenarioCatalog, ScenarioId, ScenarioModifier, ScenarioSelection,
    ScenePatch, UnknownScenario,
};
pub use session::{SimulationSession, MAX_CACHED_RUNS};

#[cfg(test)]
pub(crate) mod test_support {
    use reel_core::{Complexity, Scene, SceneStatus, VfxIntensity, VfxShot, VfxShotStatus};
    use rust_decimal::Decimal;

    pub fn scene(n: u32, complexity: Complexity) -> Scene {
        Scene {
            id: format!("s{n}"),
            scene_number: n,
            description: format!("Scene {n}"),
            location: "Ramoji Film City".to_string(),
            complexity,
            estimated_cost: Decimal::ONE,
            estimated_duration: 4.0,
            vfx_required: false,
            vfx_intensity: None,
            status: SceneStatus::Planned,
            cast_needed: vec!["Pushpa".to_string()],
        }
    }

    pub fn shot(id: &str, scene_number: u32) -> VfxShot {
        VfxShot {
            id: id.to_string(),
            scene_number,
            description: String::new(),
            estimated_cost: Decimal::new(5, 1),
            complexity: VfxIntensity::Medium,
            status: VfxShotStatus::Pending,
            vendor: None,
        }
    }
}
