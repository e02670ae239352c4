//! On-set safety risk.
//!
//! An additive point model. Every trigger is checked independently, adds its
//! points and records a label; the total is capped at 100 and bucketed into
//! a level.

use reel_core::{location, Complexity, Scene, VfxIntensity};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_RISK: u8 = 100;

/// Lower-cased markers of large groups on set.
const CROWD_MARKERS: &[&str] = &["crowd", "villagers", "dancers", "background"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            50.. => RiskLevel::Critical,
            35..=49 => RiskLevel::High,
            20..=34 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Result of a safety assessment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyRisk {
    pub level: RiskLevel,
    /// Capped point total in [0, 100].
    pub score: u8,
    /// Human-readable label per trigger, in evaluation order.
    pub factors: Vec<String>,
}

fn has_stunt_role(scene: &Scene) -> bool {
    scene.cast_needed.iter().any(|r| r.contains("Stunt"))
}

fn has_crowd_role(scene: &Scene) -> bool {
    scene.cast_needed.iter().any(|r| {
        let lower = r.to_lowercase();
        CROWD_MARKERS.iter().any(|m| lower.contains(m))
    })
}

fn has_heavy_vfx(scene: &Scene) -> bool {
    matches!(
        scene.effective_vfx_intensity(),
        Some(VfxIntensity::High | VfxIntensity::Extreme)
    )
}

pub fn assess_safety(scene: &Scene) -> SafetyRisk {
    let triggers: [(bool, u32, &str); 7] = [
        (
            scene.complexity == Complexity::Stunt,
            35,
            "Stunt sequence",
        ),
        (
            scene.complexity == Complexity::Action,
            20,
            "Action choreography",
        ),
        (has_stunt_role(scene), 15, "Stunt performers on set"),
        (has_crowd_role(scene), 15, "Crowd management"),
        (has_heavy_vfx(scene), 10, "Heavy VFX rigging"),
        (
            location::is_hazardous_outdoor(&scene.location),
            10,
            "Outdoor location",
        ),
        (
            location::is_international(&scene.location),
            5,
            "International shoot",
        ),
    ];

    let mut total: u32 = 0;
    let mut factors = Vec::new();
    for (hit, points, label) in triggers {
        if hit {
            total += points;
            factors.push(label.to_string());
        }
    }
    let score = total.min(MAX_RISK as u32) as u8;
    SafetyRisk {
        level: RiskLevel::from_score(score),
        score,
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scene;
    use proptest::prelude::*;

    #[test]
    fn ring_road_stunt_is_critical() {
        let mut s = scene(9, Complexity::Stunt);
        s.cast_needed = vec!["Stunt doubles".to_string()];
        s.location = "Outer Ring Road, Hyderabad".to_string();
        let r = assess_safety(&s);
        assert_eq!(r.score, 60);
        assert_eq!(r.level, RiskLevel::Critical);
        assert_eq!(
            r.factors,
            vec!["Stunt sequence", "Stunt performers on set", "Outdoor location"]
        );
    }

    #[test]
    fn quiet_studio_dialogue_is_low() {
        let r = assess_safety(&scene(1, Complexity::Dialogue));
        assert_eq!(r.score, 0);
        assert_eq!(r.level, RiskLevel::Low);
        assert!(r.factors.is_empty());
    }

    #[test]
    fn crowd_match_ignores_case() {
        let mut s = scene(7, Complexity::Song);
        s.cast_needed = vec!["Srivalli".to_string(), "background DANCERS".to_string()];
        s.location = "Interlaken, Switzerland".to_string();
        let r = assess_safety(&s);
        // crowd + international
        assert_eq!(r.score, 20);
        assert_eq!(r.level, RiskLevel::Medium);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(RiskLevel::from_score(19), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(20), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(35), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Critical);
    }

    #[test]
    fn everything_at_once_caps_at_hundred() {
        let mut s = scene(10, Complexity::Stunt);
        s.vfx_required = true;
        s.vfx_intensity = Some(VfxIntensity::Extreme);
        s.cast_needed = vec!["Stunt team".into(), "Villagers".into()];
        s.location = "Port Road, Switzerland".into();
        let r = assess_safety(&s);
        // 35 + 15 + 15 + 10 + 10 + 5 = 90, action trigger is exclusive with stunt
        assert_eq!(r.score, 90);
        assert_eq!(r.factors.len(), 6);
    }

    proptest! {
        #[test]
        fn score_bounded_and_deterministic(stunt in any::<bool>(),
                                           crowd in any::<bool>(),
                                           tier in 0usize..4,
                                           loc in prop::sample::select(vec![
                                               "Seshachalam Forest",
                                               "Chennai Port",
                                               "Zermatt, Switzerland",
                                               "Ramoji Film City",
                                           ])) {
            let mut s = scene(1, if stunt { Complexity::Stunt } else { Complexity::Action });
            if crowd {
                s.cast_needed.push("Crowd".into());
            }
            s.vfx_required = true;
            s.vfx_intensity = Some(VfxIntensity::from_index(tier));
            s.location = loc.to_string();
            let a = assess_safety(&s);
            prop_assert!(a.score <= MAX_RISK);
            prop_assert_eq!(a.level, RiskLevel::from_score(a.score));
            prop_assert_eq!(a, assess_safety(&s));
        }
    }
}
