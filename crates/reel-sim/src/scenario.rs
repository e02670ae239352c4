//! Named what-if scenarios and the scene transformations behind them.
//!
//! Scenario ids form a closed set. What each id does is data: a
//! [`ScenarioCatalog`] maps every id to an ordered list of
//! [`ScenarioModifier`]s, so the transformations can change without touching
//! the engine. Every modifier is idempotent on its own.

use reel_core::{Complexity, Scene, SceneStatus, VfxIntensity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// A selectable scenario. Declaration order is application order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioId {
    RemoveSwitzerland,
    SimplifyClimax,
    AddFlashback,
    ReplaceTruck,
    CutItemSong,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 5] = [
        ScenarioId::RemoveSwitzerland,
        ScenarioId::SimplifyClimax,
        ScenarioId::AddFlashback,
        ScenarioId::ReplaceTruck,
        ScenarioId::CutItemSong,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioId::RemoveSwitzerland => "remove-switzerland",
            ScenarioId::SimplifyClimax => "simplify-climax",
            ScenarioId::AddFlashback => "add-flashback",
            ScenarioId::ReplaceTruck => "replace-truck",
            ScenarioId::CutItemSong => "cut-item-song",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScenario(pub String);

impl fmt::Display for UnknownScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scenario ignored: {}", self.0)
    }
}

impl FromStr for ScenarioId {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioId::ALL
            .into_iter()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| UnknownScenario(s.to_string()))
    }
}

/// A set of selected scenarios. Iterates in application order.
pub type ScenarioSelection = BTreeSet<ScenarioId>;

/// Parse scenario ids leniently: recognized ids are selected, the rest are
/// returned as warnings instead of failing the run.
pub fn parse_scenarios<I, S>(ids: I) -> (ScenarioSelection, Vec<UnknownScenario>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selected = ScenarioSelection::new();
    let mut unknown = Vec::new();
    for raw in ids {
        let raw = raw.as_ref();
        match raw.parse::<ScenarioId>() {
            Ok(id) => {
                selected.insert(id);
            }
            Err(e) => {
                warn!(scenario = raw, "unknown scenario ignored");
                unknown.push(e);
            }
        }
    }
    (selected, unknown)
}

/// Fields to overwrite on a scene. `None` leaves the field alone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenePatch {
    pub description: Option<String>,
    pub location: Option<String>,
    pub complexity: Option<Complexity>,
    pub estimated_cost: Option<Decimal>,
    pub estimated_duration: Option<f64>,
    pub vfx_required: Option<bool>,
    pub vfx_intensity: Option<VfxIntensity>,
    pub cast_needed: Option<Vec<String>>,
}

impl ScenePatch {
    fn apply_to(&self, scene: &mut Scene) {
        if let Some(v) = &self.description {
            scene.description = v.clone();
        }
        if let Some(v) = &self.location {
            scene.location = v.clone();
        }
        if let Some(v) = self.complexity {
            scene.complexity = v;
        }
        if let Some(v) = self.estimated_cost {
            scene.estimated_cost = v;
        }
        if let Some(v) = self.estimated_duration {
            scene.estimated_duration = v;
        }
        if let Some(v) = self.vfx_required {
            scene.vfx_required = v;
        }
        if let Some(v) = self.vfx_intensity {
            scene.vfx_intensity = Some(v);
        }
        if let Some(v) = &self.cast_needed {
            scene.cast_needed = v.clone();
        }
    }
}

/// One transformation of a scene collection. Missing target scenes are a no-op.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioModifier {
    /// Drop the scene with this number.
    RemoveScene { scene_number: u32 },
    /// Scale a scene's cost and cap its VFX tier.
    ShrinkScene {
        scene_number: u32,
        cost_factor: Decimal,
        max_vfx_intensity: VfxIntensity,
    },
    /// Append a scene unless its number is already taken.
    AppendScene { scene: Scene },
    /// Overwrite fields on a scene.
    ReplaceFields { scene_number: u32, patch: ScenePatch },
}

impl ScenarioModifier {
    /// Apply in place to a collection the caller owns.
    pub fn apply(&self, scenes: &mut Vec<Scene>) {
        match self {
            ScenarioModifier::RemoveScene { scene_number } => {
                scenes.retain(|s| s.scene_number != *scene_number);
            }
            ScenarioModifier::ShrinkScene {
                scene_number,
                cost_factor,
                max_vfx_intensity,
            } => {
                if let Some(s) = scenes.iter_mut().find(|s| s.scene_number == *scene_number) {
                    s.estimated_cost *= *cost_factor;
                    if let Some(current) = s.effective_vfx_intensity() {
                        s.vfx_intensity = Some(current.min(*max_vfx_intensity));
                    }
                }
            }
            ScenarioModifier::AppendScene { scene } => {
                if scenes.iter().any(|s| s.scene_number == scene.scene_number) {
                    debug!(
                        scene = scene.scene_number,
                        "scene number taken, append skipped"
                    );
                } else {
                    scenes.push(scene.clone());
                }
            }
            ScenarioModifier::ReplaceFields {
                scene_number,
                patch,
            } => {
                if let Some(s) = scenes.iter_mut().find(|s| s.scene_number == *scene_number) {
                    patch.apply_to(s);
                }
            }
        }
    }
}

/// Scenario id to modifiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioCatalog {
    entries: BTreeMap<ScenarioId, Vec<ScenarioModifier>>,
}

impl ScenarioCatalog {
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, id: ScenarioId, modifiers: Vec<ScenarioModifier>) {
        self.entries.insert(id, modifiers);
    }

    pub fn modifiers(&self, id: ScenarioId) -> &[ScenarioModifier] {
        self.entries.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Apply the selected scenarios, in [`ScenarioId`] order, to an owned collection.
    pub fn apply(&self, selection: &ScenarioSelection, scenes: &mut Vec<Scene>) {
        for id in selection {
            let modifiers = self.modifiers(*id);
            if modifiers.is_empty() {
                warn!(scenario = %id, "scenario has no modifiers in this catalog");
            }
            for m in modifiers {
                m.apply(scenes);
            }
            debug!(scenario = %id, scenes = scenes.len(), "scenario applied");
        }
    }
}

impl Default for ScenarioCatalog {
    /// The built-in what-if scenarios for the sample production.
    fn default() -> Self {
        let mut c = Self::empty();
        c.set(
            ScenarioId::RemoveSwitzerland,
            vec![ScenarioModifier::RemoveScene { scene_number: 6 }],
        );
        c.set(
            ScenarioId::SimplifyClimax,
            vec![ScenarioModifier::ShrinkScene {
                scene_number: 10,
                cost_factor: Decimal::new(6, 1),
                max_vfx_intensity: VfxIntensity::High,
            }],
        );
        c.set(
            ScenarioId::AddFlashback,
            vec![ScenarioModifier::AppendScene {
                scene: Scene {
                    id: "s13-flashback".to_string(),
                    scene_number: 13,
                    description: "Flashback: young Pushpa and his mother".to_string(),
                    location: "Chittoor Village Set, Ramoji Film City".to_string(),
                    complexity: Complexity::Dialogue,
                    estimated_cost: Decimal::new(12, 1),
                    estimated_duration: 4.0,
                    vfx_required: false,
                    vfx_intensity: None,
                    status: SceneStatus::Planned,
                    cast_needed: vec!["Young Pushpa".to_string(), "Parvathamma".to_string()],
                },
            }],
        );
        c.set(
            ScenarioId::ReplaceTruck,
            vec![ScenarioModifier::ReplaceFields {
                scene_number: 3,
                patch: ScenePatch {
                    description: Some("Truck chase reworked as a backlot foot chase".to_string()),
                    location: Some("Backlot, Ramoji Film City".to_string()),
                    complexity: Some(Complexity::Action),
                    estimated_cost: Some(Decimal::new(28, 1)),
                    estimated_duration: Some(6.0),
                    vfx_intensity: Some(VfxIntensity::Medium),
                    cast_needed: Some(vec!["Pushpa".to_string(), "Henchmen".to_string()]),
                    ..ScenePatch::default()
                },
            }],
        );
        c.set(
            ScenarioId::CutItemSong,
            vec![ScenarioModifier::RemoveScene { scene_number: 8 }],
        );
        c
    }
}
