//! Baseline versus simulated comparison.
//!
//! Each metric carries a direction so a change can be judged: more cost is
//! bad, more feasibility is good. Rendering follows the dashboard format
//! `"<arrow> <abs delta> (<pct>%)"`.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::SimulationResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    TotalCost,
    Feasibility,
    MassAppeal,
    ClassAppeal,
    ShootDays,
    VfxShotCount,
    SceneCount,
}

/// Which way a metric should move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
    Neutral,
}

/// Verdict on a change; the dashboard paints `Bad` red and `Good` green.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Good,
    Bad,
    Neutral,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::TotalCost,
        Metric::Feasibility,
        Metric::MassAppeal,
        Metric::ClassAppeal,
        Metric::ShootDays,
        Metric::VfxShotCount,
        Metric::SceneCount,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::TotalCost => "Total cost",
            Metric::Feasibility => "Feasibility",
            Metric::MassAppeal => "Mass appeal",
            Metric::ClassAppeal => "Class appeal",
            Metric::ShootDays => "Shoot days",
            Metric::VfxShotCount => "VFX shots",
            Metric::SceneCount => "Scenes",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Metric::TotalCost | Metric::ShootDays | Metric::VfxShotCount => {
                Direction::LowerIsBetter
            }
            Metric::Feasibility | Metric::MassAppeal | Metric::ClassAppeal => {
                Direction::HigherIsBetter
            }
            Metric::SceneCount => Direction::Neutral,
        }
    }

    /// Decimal places shown for the absolute delta.
    fn precision(self) -> usize {
        match self {
            Metric::TotalCost | Metric::Feasibility => 1,
            _ => 0,
        }
    }

    pub fn value(self, r: &SimulationResult) -> f64 {
        match self {
            Metric::TotalCost => r.total_cost.to_f64().unwrap_or(0.0),
            Metric::Feasibility => r.feasibility,
            Metric::MassAppeal => r.mass_appeal as f64,
            Metric::ClassAppeal => r.class_appeal as f64,
            Metric::ShootDays => r.shoot_days as f64,
            Metric::VfxShotCount => r.vfx_shot_count as f64,
            Metric::SceneCount => r.scene_count as f64,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Change of one metric between baseline and simulation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub metric: Metric,
    pub baseline: f64,
    pub simulated: f64,
    /// `simulated - baseline`.
    pub change: f64,
    /// Change relative to baseline, in percent; 0 when the baseline is 0.
    pub percent: f64,
}

/// Change with a zero-baseline guard.
pub fn delta(metric: Metric, baseline: f64, simulated: f64) -> Delta {
    let change = simulated - baseline;
    let percent = if baseline == 0.0 {
        0.0
    } else {
        change / baseline * 100.0
    };
    Delta {
        metric,
        baseline,
        simulated,
        change,
        percent,
    }
}

impl Delta {
    fn is_flat(&self) -> bool {
        let scale = 10f64.powi(self.metric.precision() as i32);
        (self.change * scale).round() == 0.0
    }

    pub fn tone(&self) -> Tone {
        if self.is_flat() {
            return Tone::Neutral;
        }
        let up = self.change > 0.0;
        match (self.metric.direction(), up) {
            (Direction::Neutral, _) => Tone::Neutral,
            (Direction::LowerIsBetter, true) | (Direction::HigherIsBetter, false) => Tone::Bad,
            (Direction::LowerIsBetter, false) | (Direction::HigherIsBetter, true) => Tone::Good,
        }
    }

    /// `"↑ 2.5 (12.0%)"`, `"↓ 3 (20.0%)"`, or `"= 0 (0.0%)"` when unchanged.
    pub fn render(&self) -> String {
        let prec = self.metric.precision();
        if self.is_flat() {
            return format!("= {:.prec$} (0.0%)", 0.0);
        }
        let arrow = if self.change > 0.0 { '↑' } else { '↓' };
        format!(
            "{} {:.prec$} ({:.1}%)",
            arrow,
            self.change.abs(),
            self.percent.abs()
        )
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.render())
    }
}

/// Baseline and simulated results with a delta per metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub baseline: SimulationResult,
    pub simulated: SimulationResult,
    pub deltas: Vec<Delta>,
}

impl Comparison {
    pub fn get(&self, metric: Metric) -> Option<&Delta> {
        self.deltas.iter().find(|d| d.metric == metric)
    }
}

pub fn compare(baseline: &SimulationResult, simulated: &SimulationResult) -> Comparison {
    let deltas = Metric::ALL
        .into_iter()
        .map(|m| delta(m, m.value(baseline), m.value(simulated)))
        .collect();
    Comparison {
        baseline: baseline.clone(),
        simulated: simulated.clone(),
        deltas,
    }
}
