//! Dramatic intensity of a scene on a 0..=5 scale.

use reel_core::{Complexity, Scene, VfxIntensity};

use crate::round_to;

pub const MAX_INTENSITY: f64 = 5.0;

fn base_intensity(complexity: Complexity) -> f64 {
    match complexity {
        Complexity::Stunt => 5.0,
        Complexity::Action => 4.0,
        Complexity::Vfx => 3.0,
        Complexity::Song => 2.0,
        Complexity::Romantic | Complexity::Dialogue => 1.0,
    }
}

fn vfx_bonus(scene: &Scene) -> f64 {
    match scene.effective_vfx_intensity() {
        Some(VfxIntensity::Extreme) => 1.0,
        Some(VfxIntensity::High) => 0.5,
        _ => 0.0,
    }
}

pub fn intensity(scene: &Scene) -> f64 {
    round_to(base_intensity(scene.complexity) + vfx_bonus(scene), 1).min(MAX_INTENSITY)
}
