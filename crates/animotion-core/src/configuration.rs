//! The user-adjustable animation configuration.
//!
//! An `AnimationConfiguration` is always paired with one selected
//! `AnimationDefinition`. All transitions here are pure: they take a
//! configuration and return a new one, leaving storage to the session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::catalog::AnimationDefinition;
use crate::error::{CatalogError, Result};

/// Iteration token meaning "repeat forever".
pub const INFINITE: &str = "infinite";

/// Iteration token used for a single run.
pub const SINGLE_ITERATION: &str = "1";

/// Duration slider range in seconds.
pub const DURATION_RANGE: RangeInclusive<f64> = 0.1..=5.0;

/// Delay slider range in seconds.
pub const DELAY_RANGE: RangeInclusive<f64> = 0.0..=2.0;

/// Timing functions offered by the configuration controls.
pub const TIMING_PRESETS: [&str; 6] = [
    "linear",
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "cubic-bezier(0.175, 0.885, 0.32, 1.275)",
];

/// What values to apply before/after the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Don't apply any values outside the animation.
    None,
    /// Retain the final keyframe values after animation ends.
    Forwards,
    /// Apply the first keyframe values during the delay period.
    Backwards,
    /// Apply both forwards and backwards behavior.
    #[default]
    Both,
}

impl FillMode {
    pub const ALL: [FillMode; 4] = [
        FillMode::None,
        FillMode::Forwards,
        FillMode::Backwards,
        FillMode::Both,
    ];

    /// CSS keyword for this fill mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Forwards => "forwards",
            Self::Backwards => "backwards",
            Self::Both => "both",
        }
    }

    /// Should apply values before animation starts (during delay)?
    pub fn applies_backwards(&self) -> bool {
        matches!(self, Self::Backwards | Self::Both)
    }

    /// Should retain values after animation ends?
    pub fn applies_forwards(&self) -> bool {
        matches!(self, Self::Forwards | Self::Both)
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| CatalogError::UnknownFillMode(s.to_string()))
    }
}

/// A single field assignment for [`AnimationConfiguration::with_field`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigField {
    Duration(f64),
    Delay(f64),
    TimingFunction(String),
    IterationCount(String),
    FillMode(FillMode),
}

/// Timing parameters applied to the selected animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfiguration {
    /// Duration of one iteration in seconds.
    pub duration: f64,
    /// Delay before the first iteration in seconds.
    pub delay: f64,
    /// Timing-function token, passed through verbatim.
    pub timing_function: String,
    /// Either a number encoded as text or `infinite`. Passed through verbatim.
    pub iteration_count: String,
    pub fill_mode: FillMode,
}

impl AnimationConfiguration {
    /// Seed a configuration from an animation's defaults.
    pub fn initial(animation: &AnimationDefinition) -> Self {
        Self {
            duration: animation.default_duration,
            delay: 0.0,
            timing_function: animation.default_timing.to_string(),
            iteration_count: SINGLE_ITERATION.to_string(),
            fill_mode: FillMode::Both,
        }
    }

    /// Re-seed for a newly selected animation.
    ///
    /// Duration and timing take the new defaults and delay returns to zero.
    /// Iteration count and fill mode carry over unchanged.
    pub fn on_selection_change(&self, animation: &AnimationDefinition) -> Self {
        Self {
            duration: animation.default_duration,
            delay: 0.0,
            timing_function: animation.default_timing.to_string(),
            ..self.clone()
        }
    }

    /// Copy with one field replaced. No validation is applied.
    pub fn with_field(&self, field: ConfigField) -> Self {
        let mut next = self.clone();
        match field {
            ConfigField::Duration(v) => next.duration = v,
            ConfigField::Delay(v) => next.delay = v,
            ConfigField::TimingFunction(v) => next.timing_function = v,
            ConfigField::IterationCount(v) => next.iteration_count = v,
            ConfigField::FillMode(v) => next.fill_mode = v,
        }
        next
    }

    /// Flip between `infinite` and a single iteration.
    ///
    /// Any numeric count present before switching to `infinite` is dropped;
    /// switching back always yields `"1"`.
    pub fn toggle_infinite(&self) -> Self {
        let next = if self.is_infinite() {
            SINGLE_ITERATION
        } else {
            INFINITE
        };
        self.with_field(ConfigField::IterationCount(next.to_string()))
    }

    /// Check if the iteration token is exactly `infinite`.
    pub fn is_infinite(&self) -> bool {
        self.iteration_count == INFINITE
    }
}

/// Clamp a slider value into its range.
pub fn clamp_to(value: f64, range: &RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}
