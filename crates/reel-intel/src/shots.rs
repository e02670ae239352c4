//! Shot list templates keyed by scene complexity.

use reel_core::{Complexity, Scene};
use serde::{Deserialize, Serialize};

/// A row of a shot list template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotTemplate {
    pub shot_type: &'static str,
    pub camera_movement: &'static str,
    pub duration: &'static str,
    pub lighting: &'static str,
}

const fn t(
    shot_type: &'static str,
    camera_movement: &'static str,
    duration: &'static str,
    lighting: &'static str,
) -> ShotTemplate {
    ShotTemplate {
        shot_type,
        camera_movement,
        duration,
        lighting,
    }
}

const ACTION: &[ShotTemplate] = &[
    t("Wide establishing", "Drone sweep", "8s", "Natural hard light"),
    t("Medium tracking", "Steadicam follow", "6s", "Natural + bounce"),
    t("Close-up impact", "Handheld shake", "2s", "High contrast"),
    t("Low angle hero", "Slow push-in", "4s", "Rim light"),
    t("Insert", "Static", "1s", "Practical"),
];

const DIALOGUE: &[ShotTemplate] = &[
    t("Two-shot", "Static", "10s", "Three-point soft"),
    t("Over-the-shoulder A", "Static", "8s", "Key + fill"),
    t("Over-the-shoulder B", "Static", "8s", "Key + fill"),
    t("Close-up reaction", "Slow push-in", "4s", "Soft key"),
];

const VFX: &[ShotTemplate] = &[
    t("Plate wide", "Locked-off", "6s", "Matched to CG"),
    t("Green screen medium", "Motion control", "5s", "Even screen light"),
    t("Element pass", "Locked-off", "3s", "Flat"),
    t("Hero close-up", "Dolly in", "4s", "Interactive light"),
];

const ROMANTIC: &[ShotTemplate] = &[
    t("Wide two-shot", "Slow crane", "10s", "Golden hour"),
    t("Close-up", "Static", "5s", "Diffused key"),
    t("Profile two-shot", "Slow arc", "6s", "Backlight haze"),
    t("Insert hands", "Static", "2s", "Soft practical"),
];

const SONG: &[ShotTemplate] = &[
    t("Master wide", "Crane up", "12s", "Stage wash"),
    t("Group medium", "Track left", "6s", "Colour gels"),
    t("Lead close-up", "Handheld float", "4s", "Beauty light"),
    t("Top shot", "Drone orbit", "6s", "Stage wash"),
    t("Beat cut insert", "Whip pan", "1s", "Strobe"),
];

const STUNT: &[ShotTemplate] = &[
    t("Safety wide", "Locked-off", "8s", "Even exterior"),
    t("Multi-cam medium", "Car rig", "5s", "Natural hard light"),
    t("Impact close-up", "High-speed static", "2s", "High key"),
    t("POV", "Body rig", "3s", "Natural"),
    t("Aftermath wide", "Slow pull-out", "6s", "Dust + backlight"),
];

/// Ordered template for a complexity.
pub fn template(complexity: Complexity) -> &'static [ShotTemplate] {
    match complexity {
        Complexity::Action => ACTION,
        Complexity::Dialogue => DIALOGUE,
        Complexity::Vfx => VFX,
        Complexity::Romantic => ROMANTIC,
        Complexity::Song => SONG,
        Complexity::Stunt => STUNT,
    }
}

/// Template for a complexity given as text. Unrecognized text falls back to dialogue.
pub fn template_for(complexity: &str) -> &'static [ShotTemplate] {
    complexity
        .parse::<Complexity>()
        .map(template)
        .unwrap_or(DIALOGUE)
}

/// A numbered directive on a scene's shot list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    /// Display number, `"<scene_number>.<shot_index>"` with 1-based index.
    pub number: String,
    pub shot_type: String,
    pub camera_movement: String,
    pub duration: String,
    pub lighting: String,
}

pub fn shot_list(scene: &Scene) -> Vec<Shot> {
    number_shots(scene.scene_number, template(scene.complexity))
}

fn number_shots(scene_number: u32, rows: &[ShotTemplate]) -> Vec<Shot> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| Shot {
            number: format!("{}.{}", scene_number, i + 1),
            shot_type: row.shot_type.to_string(),
            camera_movement: row.camera_movement.to_string(),
            duration: row.duration.to_string(),
            lighting: row.lighting.to_string(),
        })
        .collect()
}
