//! Joins from a scene to the records related to it.
//!
//! Missing counterparts are not errors: a VFX shot on an unknown scene
//! number, a role with no mapped actor or a schedule entry for a deleted
//! scene simply drop out of the result.

use reel_core::{Actor, RoleResolver, Scene, ShootDay, VfxShot};
use std::collections::BTreeSet;
use tracing::trace;

/// VFX shots whose scene number matches the scene.
pub fn linked_vfx_shots<'a>(scene: &Scene, shots: &'a [VfxShot]) -> Vec<&'a VfxShot> {
    shots
        .iter()
        .filter(|v| v.scene_number == scene.scene_number)
        .collect()
}

/// Actors for the scene's cast, in `cast_needed` order.
///
/// Each role is resolved to an actor name and then to the first actor with
/// that name. An actor playing several listed roles appears once.
pub fn linked_actors<'a>(
    scene: &Scene,
    actors: &'a [Actor],
    roles: &dyn RoleResolver,
) -> Vec<&'a Actor> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut out = Vec::new();
    for role in &scene.cast_needed {
        let Some(name) = roles.actor_name(role) else {
            trace!(scene = scene.scene_number, role = %role, "role has no mapped actor");
            continue;
        };
        if let Some(actor) = actors.iter().find(|a| a.name == name) {
            if seen.insert(&actor.id) {
                out.push(actor);
            }
        }
    }
    out
}

/// Schedule days on which the scene is shot.
pub fn scheduled_days<'a>(scene: &Scene, days: &'a [ShootDay]) -> Vec<&'a ShootDay> {
    days.iter().filter(|d| d.includes(&scene.id)).collect()
}

/// Number of schedule days on which the scene is shot.
pub fn shoot_day_count(scene: &Scene, days: &[ShootDay]) -> usize {
    days.iter().filter(|d| d.includes(&scene.id)).count()
}
