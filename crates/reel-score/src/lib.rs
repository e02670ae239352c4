#![deny(warnings)]

//! Scene scorers and whole-script aggregators.
//!
//! Every function here is pure: one scene (or a slice of scenes) in, a
//! value out, no hidden state and no failure path. Inputs that would divide
//! by zero produce zero instead.
//!
//! - [`feasibility`]: weighted 1..=10 achievability score
//! - [`cost`]: AI cost estimate including VFX and crew/location overheads
//! - [`intensity`]: 0..=5 dramatic intensity
//! - [`safety`]: additive on-set risk model
//! - [`aggregate`]: appeal, script health and VFX intensity over a script

pub mod aggregate;
pub mod cost;
pub mod feasibility;
pub mod intensity;
pub mod safety;

pub use aggregate::{
    appeal, class_appeal, mass_appeal, mean_feasibility, script_health, vfx_intensity_score,
    Appeal, ScriptHealth,
};
pub use cost::ai_cost;
pub use feasibility::{feasibility, feasibility_breakdown, FeasibilityBreakdown};
pub use intensity::intensity;
pub use safety::{assess_safety, RiskLevel, SafetyRisk};

/// Round half away from zero to `dp` decimal places.
///
/// Example:
/// assert_eq!(round_to(6.95, 1), 7.0);
pub fn round_to(value: f64, dp: i32) -> f64 {
    let scale = 10f64.powi(dp);
    (value * scale).round() / scale
}

/// Percentage of `part` in `total`, rounded to an integer. Zero when `total` is zero.
pub fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * part as f64 / total as f64).round() as u32
}

#[cfg(test)]
pub(crate) mod test_support {
    use reel_core::{Complexity, Scene, SceneStatus};
    use rust_decimal::Decimal;

    /// A plain studio scene: one crore, four hours, one role, no VFX.
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
}
