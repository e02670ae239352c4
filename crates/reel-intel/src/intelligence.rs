//! Per-scene read model combining every scorer and linker.

use reel_core::{Actor, Production, RoleResolver, Scene, ShootDay, VfxShot};
use reel_score::{FeasibilityBreakdown, SafetyRisk};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::link::{linked_actors, linked_vfx_shots, shoot_day_count};
use crate::shots::template;

/// Related collections a scene is joined against.
#[derive(Clone, Copy)]
pub struct ScriptContext<'a> {
    pub vfx_shots: &'a [VfxShot],
    pub actors: &'a [Actor],
    pub shoot_days: &'a [ShootDay],
    pub roles: &'a dyn RoleResolver,
}

impl<'a> ScriptContext<'a> {
    pub fn from_production(p: &'a Production) -> Self {
        Self {
            vfx_shots: &p.vfx_shots,
            actors: &p.actors,
            shoot_days: &p.shoot_days,
            roles: &p.roles,
        }
    }
}

/// Everything derived about one scene. Recomputed from inputs, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneIntelligence {
    pub scene: Scene,
    /// Canonical weighted feasibility.
    pub feasibility: f64,
    pub feasibility_breakdown: FeasibilityBreakdown,
    pub ai_cost: Decimal,
    pub intensity: f64,
    /// Template shots for the complexity plus one per linked VFX shot.
    pub estimated_shots: usize,
    pub safety_risk: SafetyRisk,
    pub linked_vfx_shots: Vec<VfxShot>,
    pub linked_actors: Vec<Actor>,
    pub shoot_days: usize,
}

pub fn scene_intelligence(scene: &Scene, ctx: &ScriptContext<'_>) -> SceneIntelligence {
    let vfx = linked_vfx_shots(scene, ctx.vfx_shots);
    let actors = linked_actors(scene, ctx.actors, ctx.roles);
    let breakdown = reel_score::feasibility_breakdown(scene);
    SceneIntelligence {
        scene: scene.clone(),
        feasibility: breakdown.feasibility,
        feasibility_breakdown: breakdown,
        ai_cost: reel_score::ai_cost(scene, vfx.iter().copied()),
        intensity: reel_score::intensity(scene),
        estimated_shots: template(scene.complexity).len() + vfx.len(),
        safety_risk: reel_score::assess_safety(scene),
        linked_vfx_shots: vfx.into_iter().cloned().collect(),
        linked_actors: actors.into_iter().cloned().collect(),
        shoot_days: shoot_day_count(scene, ctx.shoot_days),
    }
}

/// One record per scene, in input order.
pub fn script_intelligence(scenes: &[Scene], ctx: &ScriptContext<'_>) -> Vec<SceneIntelligence> {
    let out: Vec<SceneIntelligence> = scenes
        .iter()
        .map(|s| scene_intelligence(s, ctx))
        .collect();
    debug!(scenes = out.len(), "scene intelligence assembled");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{actor, day, scene, shot};
    use reel_core::{Complexity, RoleTable, VfxIntensity};
    use reel_score::RiskLevel;

    #[test]
    fn assembles_forest_chase() {
        let mut s = scene(1, Complexity::Action);
        s.location = "Seshachalam Forest".into();
        s.estimated_cost = Decimal::new(25, 1);
        s.estimated_duration = 3.0;
        s.vfx_required = true;
        s.vfx_intensity = Some(VfxIntensity::Medium);
        s.cast_needed = vec!["Pushpa".into(), "Henchmen".into()];

        let shots = vec![shot("v1", 1), shot("v2", 2)];
        let actors = vec![actor("a1", "Allu Arjun")];
        let days = vec![day("d1", 1, &["s1"]), day("d2", 2, &["s1"])];
        let roles = RoleTable::new().with("Pushpa", "Allu Arjun");
        let ctx = ScriptContext {
            vfx_shots: &shots,
            actors: &actors,
            shoot_days: &days,
            roles: &roles,
        };

        let intel = scene_intelligence(&s, &ctx);
        assert_eq!(intel.feasibility, 7.0);
        assert_eq!(intel.intensity, 4.0);
        // 2.5 + 0.5 + 0.375 + 0.125
        assert_eq!(intel.ai_cost, Decimal::new(35, 1));
        assert_eq!(intel.estimated_shots, 5 + 1);
        assert_eq!(intel.safety_risk.score, 30);
        assert_eq!(intel.safety_risk.level, RiskLevel::Medium);
        assert_eq!(intel.linked_vfx_shots.len(), 1);
        assert_eq!(intel.linked_actors[0].id, "a1");
        assert_eq!(intel.shoot_days, 2);

        let json = serde_json::to_value(&intel).unwrap();
        assert_eq!(json["safety_risk"]["level"], "medium");
        assert_eq!(json["scene"]["complexity"], "action");
    }

    #[test]
    fn preserves_scene_order() {
        let scenes = vec![
            scene(3, Complexity::Song),
            scene(1, Complexity::Dialogue),
            scene(2, Complexity::Stunt),
        ];
        let roles = RoleTable::new();
        let ctx = ScriptContext {
            vfx_shots: &[],
            actors: &[],
            shoot_days: &[],
            roles: &roles,
        };
        let numbers: Vec<u32> = script_intelligence(&scenes, &ctx)
            .iter()
            .map(|i| i.scene.scene_number)
            .collect();
        assert_eq!(numbers, [3, 1, 2]);
    }
}
