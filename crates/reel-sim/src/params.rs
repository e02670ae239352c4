//! Continuous simulation sliders.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ACTION_MULTIPLIER_RANGE: (f64, f64) = (0.5, 2.0);
pub const VFX_SCALE_RANGE: (f64, f64) = (0.5, 2.0);
pub const MAX_SONG_COUNT: u8 = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{0} must be finite")]
    NonFinite(&'static str),
}

/// Slider values applied after the named scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Cost multiplier for action and stunt scenes.
    pub action_multiplier: f64,
    /// Scale applied to the VFX tier index of VFX scenes.
    pub vfx_scale: f64,
    /// Maximum number of song scenes kept.
    pub song_count: u8,
}

impl Default for SimulationParams {
    /// Neutral sliders: no scaling and the full song allowance.
    fn default() -> Self {
        Self {
            action_multiplier: 1.0,
            vfx_scale: 1.0,
            song_count: MAX_SONG_COUNT,
        }
    }
}

fn check(name: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ParamError> {
    if !value.is_finite() {
        return Err(ParamError::NonFinite(name));
    }
    if !(min..=max).contains(&value) {
        return Err(ParamError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

impl SimulationParams {
    /// Reject values a slider could not produce.
    pub fn validate(&self) -> Result<(), ParamError> {
        check(
            "action_multiplier",
            self.action_multiplier,
            ACTION_MULTIPLIER_RANGE,
        )?;
        check("vfx_scale", self.vfx_scale, VFX_SCALE_RANGE)?;
        check(
            "song_count",
            self.song_count as f64,
            (0.0, MAX_SONG_COUNT as f64),
        )?;
        Ok(())
    }

    /// Pull every value into its slider range. Non-finite values reset to neutral.
    pub fn clamped(self) -> Self {
        let fit = |v: f64, (min, max): (f64, f64)| {
            if v.is_finite() {
                v.clamp(min, max)
            } else {
                1.0
            }
        };
        Self {
            action_multiplier: fit(self.action_multiplier, ACTION_MULTIPLIER_RANGE),
            vfx_scale: fit(self.vfx_scale, VFX_SCALE_RANGE),
            song_count: self.song_count.min(MAX_SONG_COUNT),
        }
    }

    /// Bit-exact key for memoization.
    pub(crate) fn key(&self) -> (u64, u64, u8) {
        (
            self.action_multiplier.to_bits(),
            self.vfx_scale.to_bits(),
            self.song_count,
        )
    }
}
