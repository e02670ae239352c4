//! Feasibility: how practically achievable a scene is, on a 1..=10 scale.
//!
//! Five factors, each clamped to [1, 10], are combined with fixed weights
//! summing to 1. The weighted score is the canonical feasibility used for
//! ranking, heat maps and simulation averages.

use reel_core::{LocationClass, Scene, VfxIntensity};
use serde::{Deserialize, Serialize};

use crate::round_to;

pub const COST_WEIGHT: f64 = 0.25;
pub const VFX_WEIGHT: f64 = 0.25;
pub const DURATION_WEIGHT: f64 = 0.15;
pub const CAST_WEIGHT: f64 = 0.15;
pub const LOCATION_WEIGHT: f64 = 0.20;

const MIN_FACTOR: f64 = 1.0;
const MAX_FACTOR: f64 = 10.0;

/// Per-factor scores plus the weighted total.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityBreakdown {
    pub cost_factor: f64,
    pub vfx_factor: f64,
    pub duration_factor: f64,
    pub cast_complexity: f64,
    pub location_difficulty: f64,
    /// Weighted sum of the factors, rounded to one decimal.
    pub feasibility: f64,
}

fn clamp_factor(v: f64) -> f64 {
    // NaN from a corrupt input collapses to the floor rather than leaking out.
    if v.is_nan() {
        return MIN_FACTOR;
    }
    v.clamp(MIN_FACTOR, MAX_FACTOR)
}

fn vfx_factor(scene: &Scene) -> f64 {
    match scene.effective_vfx_intensity() {
        None => 10.0,
        Some(VfxIntensity::Low) => 8.0,
        Some(VfxIntensity::Medium) => 6.0,
        Some(VfxIntensity::High) => 4.0,
        Some(VfxIntensity::Extreme) => 2.0,
    }
}

fn location_difficulty(scene: &Scene) -> f64 {
    match scene.location_class() {
        LocationClass::International => 3.0,
        LocationClass::Outdoor => 5.0,
        LocationClass::Studio => 9.0,
    }
}

/// Score every factor of a scene and combine them.
pub fn feasibility_breakdown(scene: &Scene) -> FeasibilityBreakdown {
    let cost_factor = clamp_factor(10.0 - (scene.cost_f64() / 12.0) * 9.0);
    let vfx_factor = vfx_factor(scene);
    let duration_factor = clamp_factor(10.0 - (scene.estimated_duration / 8.0) * 6.0);
    let cast_complexity = clamp_factor(10.0 - (scene.cast_needed.len() as f64 / 5.0) * 4.0);
    let location_difficulty = location_difficulty(scene);

    let weighted = cost_factor * COST_WEIGHT
        + vfx_factor * VFX_WEIGHT
        + duration_factor * DURATION_WEIGHT
        + cast_complexity * CAST_WEIGHT
        + location_difficulty * LOCATION_WEIGHT;

    FeasibilityBreakdown {
        cost_factor,
        vfx_factor,
        duration_factor,
        cast_complexity,
        location_difficulty,
        feasibility: round_to(weighted, 1).clamp(MIN_FACTOR, MAX_FACTOR),
    }
}

/// Canonical feasibility score of a scene.
pub fn feasibility(scene: &Scene) -> f64 {
    feasibility_breakdown(scene).feasibility
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scene;
    use proptest::prelude::*;
    use reel_core::Complexity;
    use rust_decimal::Decimal;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn forest_chase_breakdown() {
        let mut s = scene(1, Complexity::Action);
        s.estimated_cost = Decimal::new(25, 1);
        s.vfx_required = true;
        s.vfx_intensity = Some(VfxIntensity::Medium);
        s.estimated_duration = 3.0;
        s.cast_needed = vec!["Pushpa".into(), "Henchmen".into()];
        s.location = "Seshachalam Forest".into();

        let b = feasibility_breakdown(&s);
        assert!(close(b.cost_factor, 8.125));
        assert!(close(b.vfx_factor, 6.0));
        assert!(close(b.duration_factor, 7.75));
        assert!(close(b.cast_complexity, 8.4));
        assert!(close(b.location_difficulty, 5.0));
        // 2.03125 + 1.5 + 1.1625 + 1.26 + 1.0 = 6.95375
        assert_eq!(b.feasibility, 7.0);
    }

    #[test]
    fn switzerland_is_international_not_just_outdoor() {
        let mut s = scene(6, Complexity::Song);
        s.location = "Interlaken, Switzerland".into();
        assert_eq!(feasibility_breakdown(&s).location_difficulty, 3.0);
        s.location = "Ramoji Film City".into();
        assert_eq!(feasibility_breakdown(&s).location_difficulty, 9.0);
    }

    #[test]
    fn unset_intensity_scores_as_low() {
        let mut s = scene(2, Complexity::Vfx);
        s.vfx_required = true;
        s.vfx_intensity = None;
        assert_eq!(feasibility_breakdown(&s).vfx_factor, 8.0);
        s.vfx_required = false;
        s.vfx_intensity = Some(VfxIntensity::Extreme);
        assert_eq!(feasibility_breakdown(&s).vfx_factor, 10.0);
    }

    #[test]
    fn huge_scene_floors_at_one() {
        let mut s = scene(3, Complexity::Stunt);
        s.estimated_cost = Decimal::new(500, 0);
        s.estimated_duration = 100.0;
        s.cast_needed = (0..40).map(|i| format!("Extra {i}")).collect();
        let b = feasibility_breakdown(&s);
        assert_eq!(b.cost_factor, 1.0);
        assert_eq!(b.duration_factor, 1.0);
        assert_eq!(b.cast_complexity, 1.0);
    }

    proptest! {
        #[test]
        fn feasibility_within_bounds(cents in 1i64..5_000_00,
                                     hours in 0.1f64..200.0,
                                     cast in 0usize..30,
                                     tier in 0usize..5) {
            let mut s = scene(1, Complexity::Action);
            s.estimated_cost = Decimal::new(cents, 2);
            s.estimated_duration = hours;
            s.cast_needed = (0..cast).map(|i| format!("Role {i}")).collect();
            s.vfx_required = tier < 4;
            s.vfx_intensity = Some(VfxIntensity::from_index(tier));
            let f = feasibility(&s);
            prop_assert!((1.0..=10.0).contains(&f));
            prop_assert_eq!(f, feasibility(&s));
        }

        #[test]
        fn cheaper_is_never_harder(cents in 1i64..2_000_00) {
            let mut cheap = scene(1, Complexity::Dialogue);
            cheap.estimated_cost = Decimal::new(cents, 2);
            let mut dear = cheap.clone();
            dear.estimated_cost = Decimal::new(cents + 100, 2);
            prop_assert!(feasibility(&cheap) >= feasibility(&dear));
        }
    }
}
