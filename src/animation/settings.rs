use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{AnimaticsError, Result};

/// Timing curve handed to the host primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    #[default]
    EaseInOut,
    EaseIn,
    EaseOut,
    Linear,
}

/// Spring parameters. `damping` is the damping ratio in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    pub damping: f32,
    #[serde(default)]
    pub initial_velocity: f32,
}

impl Spring {
    pub fn new(damping: f32, initial_velocity: f32) -> Result<Self> {
        if !(damping > 0.0 && damping <= 1.0) {
            return Err(AnimaticsError::InvalidSpring { damping });
        }
        if !initial_velocity.is_finite() {
            return Err(AnimaticsError::InvalidVelocity {
                value: initial_velocity,
            });
        }
        Ok(Self {
            damping,
            initial_velocity,
        })
    }
}

/// Settings carried by every leaf animation.
///
/// Combinators hold no settings of their own; applying settings to a
/// combinator writes them into each leaf below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    pub duration: Duration,
    pub delay: Duration,
    pub curve: Curve,
    pub spring: Option<Spring>,
}

impl AnimationSettings {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

    /// Parses and validates a JSON preset.
    pub fn from_json(json: &str) -> Result<Self> {
        let preset: SettingsPreset = serde_json::from_str(json)?;
        let settings = Self::try_from(preset)?;
        log::debug!("Loaded animation preset: {settings:?}");
        Ok(settings)
    }

    #[must_use]
    pub fn to_preset(&self) -> SettingsPreset {
        SettingsPreset {
            duration: self.duration.as_secs_f32(),
            delay: self.delay.as_secs_f32(),
            curve: self.curve,
            spring: self.spring,
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            delay: Duration::ZERO,
            curve: Curve::EaseInOut,
            spring: None,
        }
    }
}

/// Serialized form of [`AnimationSettings`], with times in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPreset {
    pub duration: f32,
    pub delay: f32,
    pub curve: Curve,
    pub spring: Option<Spring>,
}

impl Default for SettingsPreset {
    fn default() -> Self {
        AnimationSettings::default().to_preset()
    }
}

impl TryFrom<SettingsPreset> for AnimationSettings {
    type Error = AnimaticsError;

    fn try_from(preset: SettingsPreset) -> Result<Self> {
        let spring = preset
            .spring
            .map(|s| Spring::new(s.damping, s.initial_velocity))
            .transpose()?;

        Ok(Self {
            duration: seconds("duration", preset.duration)?,
            delay: seconds("delay", preset.delay)?,
            curve: preset.curve,
            spring,
        })
    }
}

/// Converts seconds into a `Duration`, rejecting negative and non-finite input.
///
/// The result is rounded to whole microseconds: `f32` seconds only carry about
/// seven significant digits, and `0.3` must come back as exactly 300ms.
pub(crate) fn seconds(field: &'static str, value: f32) -> Result<Duration> {
    let duration = Duration::try_from_secs_f32(value)
        .map_err(|_| AnimaticsError::InvalidDuration { field, value })?;
    let micros = (duration.as_nanos() + 500) / 1_000;
    Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(u64::MAX)))
}
