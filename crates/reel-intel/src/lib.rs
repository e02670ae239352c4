#![deny(warnings)]

//! Scene intelligence: joins scenes to their VFX shots, actors and schedule,
//! runs every scorer and assembles the per-scene read model used by reports.

pub mod intelligence;
pub mod link;
pub mod shots;
pub mod summary;

pub use intelligence::{scene_intelligence, script_intelligence, SceneIntelligence, ScriptContext};
pub use link::{linked_actors, linked_vfx_shots, scheduled_days, shoot_day_count};
pub use shots::{shot_list, template, template_for, Shot, ShotTemplate};
pub use summary::{summarize, RiskCounts, ScriptSummary};
