//! AI cost estimate for a scene.
//!
//! ai_cost = base + Σ linked VFX shot costs + base·crew + base·location,
//! computed in exact decimal arithmetic and rounded to one decimal.

use reel_core::{location, Complexity, Scene, VfxShot};
use rust_decimal::{Decimal, RoundingStrategy};

/// Crew overhead as a fraction of base cost.
pub fn crew_factor(complexity: Complexity) -> Decimal {
    if complexity.is_action_like() {
        Decimal::new(15, 2)
    } else {
        Decimal::new(8, 2)
    }
}

/// Location overhead as a fraction of base cost.
pub fn location_factor(location_name: &str) -> Decimal {
    if location::is_international(location_name) {
        Decimal::new(25, 2)
    } else if location::is_harbour(location_name) {
        Decimal::new(12, 2)
    } else {
        Decimal::new(5, 2)
    }
}

/// Estimate the all-in cost of a scene from its base cost and linked VFX shots.
///
/// Example:
/// // 2.0 base, 1.0 of VFX, action in a port: 2 + 1 + 0.30 + 0.24 = 3.54 -> 3.5
pub fn ai_cost<'a>(scene: &Scene, linked_vfx: impl IntoIterator<Item = &'a VfxShot>) -> Decimal {
    let base = scene.estimated_cost;
    let vfx_addon: Decimal = linked_vfx.into_iter().map(|v| v.estimated_cost).sum();
    let total = base
        + vfx_addon
        + base * crew_factor(scene.complexity)
        + base * location_factor(&scene.location);
    total.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
