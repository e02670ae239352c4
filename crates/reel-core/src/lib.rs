#![deny(warnings)]

//! Core domain records and invariants for the script intelligence engine.
//!
//! This crate defines the serializable input records (scenes, VFX shots,
//! actors, shoot days) handed over by the production data store, together
//! with validation helpers that check their basic invariants. Nothing here
//! computes scores; see `reel-score` for that.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub mod location;
pub mod roles;

pub use location::LocationClass;
pub use roles::{RoleResolver, RoleTable};

/// Narrative kind of a scene. Drives intensity, crew cost, appeal and shot templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Action,
    Dialogue,
    Vfx,
    Romantic,
    Song,
    Stunt,
}

impl Complexity {
    /// Every complexity, in declaration order.
    pub const ALL: [Complexity; 6] = [
        Complexity::Action,
        Complexity::Dialogue,
        Complexity::Vfx,
        Complexity::Romantic,
        Complexity::Song,
        Complexity::Stunt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Action => "action",
            Complexity::Dialogue => "dialogue",
            Complexity::Vfx => "vfx",
            Complexity::Romantic => "romantic",
            Complexity::Song => "song",
            Complexity::Stunt => "stunt",
        }
    }

    /// Action and stunt scenes need larger crews and respond to the action multiplier.
    pub fn is_action_like(self) -> bool {
        matches!(self, Complexity::Action | Complexity::Stunt)
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Complexity::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownComplexity(s.to_string()))
    }
}

/// VFX intensity tier, ordered from cheapest to most demanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VfxIntensity {
    Low,
    Medium,
    High,
    Extreme,
}

impl VfxIntensity {
    /// Tier ladder used by index arithmetic.
    pub const LADDER: [VfxIntensity; 4] = [
        VfxIntensity::Low,
        VfxIntensity::Medium,
        VfxIntensity::High,
        VfxIntensity::Extreme,
    ];

    /// Position on the ladder (low = 0, extreme = 3).
    pub fn index(self) -> usize {
        match self {
            VfxIntensity::Low => 0,
            VfxIntensity::Medium => 1,
            VfxIntensity::High => 2,
            VfxIntensity::Extreme => 3,
        }
    }

    /// Ladder lookup; indices past the top saturate at `Extreme`.
    pub fn from_index(index: usize) -> Self {
        Self::LADDER[index.min(Self::LADDER.len() - 1)]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VfxIntensity::Low => "low",
            VfxIntensity::Medium => "medium",
            VfxIntensity::High => "high",
            VfxIntensity::Extreme => "extreme",
        }
    }
}

impl fmt::Display for VfxIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Production status of a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneStatus {
    Completed,
    Shooting,
    Planned,
}

/// One narrative unit of the script.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique record id.
    pub id: String,
    /// Unique, stable scene number. Join key for VFX shots.
    pub scene_number: u32,
    pub description: String,
    /// Free-text location, classified by keyword (see [`location`]).
    pub location: String,
    pub complexity: Complexity,
    /// Estimated cost in crore (> 0).
    pub estimated_cost: Decimal,
    /// Estimated duration in hours-equivalent (> 0).
    pub estimated_duration: f64,
    pub vfx_required: bool,
    /// Declared VFX tier; `None` reads as `Low` when VFX is required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vfx_intensity: Option<VfxIntensity>,
    pub status: SceneStatus,
    /// Role or character names, resolved to actors through a [`RoleResolver`].
    #[serde(default)]
    pub cast_needed: Vec<String>,
}

impl Scene {
    /// Effective VFX tier: `None` for non-VFX scenes, otherwise the declared tier or `Low`.
    pub fn effective_vfx_intensity(&self) -> Option<VfxIntensity> {
        if self.vfx_required {
            Some(self.vfx_intensity.unwrap_or(VfxIntensity::Low))
        } else {
            None
        }
    }

    /// Cost as a float for the weighting formulas. Non-representable values read as zero.
    pub fn cost_f64(&self) -> f64 {
        self.estimated_cost.to_f64().unwrap_or(0.0)
    }

    pub fn location_class(&self) -> LocationClass {
        LocationClass::classify(&self.location)
    }
}

/// Progress of a single VFX shot at the vendor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VfxShotStatus {
    #[default]
    Pending,
    InProgress,
    Review,
    Approved,
}

/// A visual-effects shot, tied to a scene by scene number (not by scene id).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VfxShot {
    pub id: String,
    pub scene_number: u32,
    #[serde(default)]
    pub description: String,
    /// Vendor cost in crore (>= 0).
    pub estimated_cost: Decimal,
    pub complexity: VfxIntensity,
    #[serde(default)]
    pub status: VfxShotStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

/// Star power tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActorTier {
    A,
    B,
    C,
}

/// A cast member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    /// Fee in crore (>= 0).
    pub fee: Decimal,
    pub tier: ActorTier,
    /// Fan base score in [0, 100].
    pub fan_base_score: u8,
    /// Overseas market pull in [0, 100].
    pub overseas_pull: u8,
    /// Social media follower count.
    pub social_following: u64,
}

/// One day on the shooting schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShootDay {
    pub id: String,
    /// Day number on the schedule (1-based).
    pub day: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: String,
    /// Scene ids shot on this day.
    #[serde(default)]
    pub scenes: Vec<String>,
}

impl ShootDay {
    pub fn includes(&self, scene_id: &str) -> bool {
        self.scenes.iter().any(|s| s == scene_id)
    }
}

/// Snapshot of every collection the engine reads, as handed over by the data store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Production {
    #[serde(default)]
    pub title: String,
    pub scenes: Vec<Scene>,
    #[serde(default)]
    pub vfx_shots: Vec<VfxShot>,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub shoot_days: Vec<ShootDay>,
    /// Role name to actor name mapping.
    #[serde(default)]
    pub roles: RoleTable,
}

/// Validation errors for domain invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Scene numbers start at 1.
    #[error("scene {0} has scene number 0")]
    ZeroSceneNumber(String),
    /// Costs must be strictly positive.
    #[error("scene {0} must have a positive estimated cost")]
    NonPositiveCost(String),
    /// Durations must be finite and strictly positive.
    #[error("scene {0} must have a positive, finite estimated duration")]
    NonPositiveDuration(String),
    /// Monetary value below zero.
    #[error("{0} carries a negative monetary value")]
    NegativeMoney(String),
    /// Score outside [0, 100].
    #[error("{field} of {id} is {value}, expected 0..=100")]
    ScoreOutOfRange {
        id: String,
        field: &'static str,
        value: u8,
    },
    /// Two records share an id.
    #[error("duplicate id: {0}")]
    DuplicateId(String),
    /// Two scenes share a scene number.
    #[error("duplicate scene number: {0}")]
    DuplicateSceneNumber(u32),
    /// Text did not name a known complexity.
    #[error("unknown scene complexity: {0}")]
    UnknownComplexity(String),
}

/// Validate a single scene.
pub fn validate_scene(scene: &Scene) -> Result<(), ValidationError> {
    if scene.scene_number == 0 {
        return Err(ValidationError::ZeroSceneNumber(scene.id.clone()));
    }
    if scene.estimated_cost <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveCost(scene.id.clone()));
    }
    if !(scene.estimated_duration.is_finite() && scene.estimated_duration > 0.0) {
        return Err(ValidationError::NonPositiveDuration(scene.id.clone()));
    }
    Ok(())
}

/// Validate a VFX shot.
pub fn validate_vfx_shot(shot: &VfxShot) -> Result<(), ValidationError> {
    if shot.estimated_cost < Decimal::ZERO {
        return Err(ValidationError::NegativeMoney(shot.id.clone()));
    }
    Ok(())
}

/// Validate an actor.
pub fn validate_actor(actor: &Actor) -> Result<(), ValidationError> {
    if actor.fee < Decimal::ZERO {
        return Err(ValidationError::NegativeMoney(actor.id.clone()));
    }
    for (field, value) in [
        ("fan_base_score", actor.fan_base_score),
        ("overseas_pull", actor.overseas_pull),
    ] {
        if value > 100 {
            return Err(ValidationError::ScoreOutOfRange {
                id: actor.id.clone(),
                field,
                value,
            });
        }
    }
    Ok(())
}

/// Validate a whole production, including id and scene number uniqueness.
///
/// Cross references (VFX shots on unknown scene numbers, schedule entries for
/// unknown scene ids, unmapped roles) are not errors here: the
/// linkers drop them.
pub fn validate_production(p: &Production) -> Result<(), ValidationError> {
    let mut ids: BTreeSet<&str> = BTreeSet::new();
    let mut numbers: BTreeSet<u32> = BTreeSet::new();
    for s in &p.scenes {
        validate_scene(s)?;
        if !ids.insert(&s.id) {
            return Err(ValidationError::DuplicateId(s.id.clone()));
        }
        if !numbers.insert(s.scene_number) {
            return Err(ValidationError::DuplicateSceneNumber(s.scene_number));
        }
    }
    for v in &p.vfx_shots {
        validate_vfx_shot(v)?;
        if !ids.insert(&v.id) {
            return Err(ValidationError::DuplicateId(v.id.clone()));
        }
    }
    for a in &p.actors {
        validate_actor(a)?;
        if !ids.insert(&a.id) {
            return Err(ValidationError::DuplicateId(a.id.clone()));
        }
    }
    for d in &p.shoot_days {
        if !ids.insert(&d.id) {
            return Err(ValidationError::DuplicateId(d.id.clone()));
        }
    }
    debug!(
        scenes = p.scenes.len(),
        vfx_shots = p.vfx_shots.len(),
        actors = p.actors.len(),
        shoot_days = p.shoot_days.len(),
        "production validated"
    );
    Ok(())
}
