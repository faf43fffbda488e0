//! Live preview model.
//!
//! This module provides:
//! - `PreviewBinding`: The animation style applied to the preview stage
//! - `IterationCount`: A lenient reading of the opaque iteration token
//! - `PlaybackSample`: Where a preview is in its timeline at a given moment
//!
//! The preview restarts whenever the selection or any configuration field
//! changes. The binding carries a `replay_key`; when it differs from the key
//! the presentation layer last rendered, the animated element must be
//! recreated so playback starts again from frame zero.

use serde::{Deserialize, Serialize};

use crate::catalog::AnimationDefinition;
use crate::configuration::{AnimationConfiguration, FillMode, INFINITE};
use crate::easing::EasingFunction;

/// Animation that gets the gradient text treatment.
pub const GRADIENT_FLOW_ID: &str = "gradient-flow";

/// Gradient layered on top of the animation for [`GRADIENT_FLOW_ID`].
pub const GRADIENT_FLOW_BACKGROUND: &str = "linear-gradient(270deg, #ff00cc, #3333ff, #00dbde)";

/// What the preview stage animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewSubject {
    #[default]
    Box,
    Text,
    Image,
}

/// How many times the preview repeats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IterationCount {
    /// Run a specific number of times (can be fractional).
    Count { count: f64 },
    /// Run indefinitely.
    Infinite,
}

impl Default for IterationCount {
    fn default() -> Self {
        Self::Count { count: 1.0 }
    }
}

impl IterationCount {
    /// Read an iteration token. Anything other than `infinite` or a positive
    /// number plays once.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token == INFINITE {
            return Self::Infinite;
        }
        match token.parse::<f64>() {
            Ok(count) if count.is_finite() && count > 0.0 => Self::Count { count },
            _ => Self::default(),
        }
    }

    /// Check if the animation should continue given the current iteration.
    pub fn should_continue(&self, current_iteration: f64) -> bool {
        match self {
            Self::Infinite => true,
            Self::Count { count } => current_iteration < *count,
        }
    }
}

/// Style binding for the preview stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewBinding {
    pub animation_name: &'static str,
    pub duration: f64,
    pub delay: f64,
    pub timing_function: String,
    pub iteration_count: String,
    pub fill_mode: FillMode,
    pub subject: PreviewSubject,
    /// Identity of the animated element. A new key forces a remount.
    pub replay_key: u64,
}

impl PreviewBinding {
    /// Bind a configuration to an animation for one preview subject.
    pub fn new(
        animation: &AnimationDefinition,
        config: &AnimationConfiguration,
        subject: PreviewSubject,
        replay_key: u64,
    ) -> Self {
        Self {
            animation_name: animation.id,
            duration: config.duration,
            delay: config.delay,
            timing_function: config.timing_function.clone(),
            iteration_count: config.iteration_count.clone(),
            fill_mode: config.fill_mode,
            subject,
            replay_key,
        }
    }

    /// Check if the gradient text treatment is layered on.
    pub fn has_gradient_treatment(&self) -> bool {
        self.animation_name == GRADIENT_FLOW_ID && self.subject == PreviewSubject::Text
    }

    /// CSS longhand declarations for the animated element, in a stable order.
    pub fn style_properties(&self) -> Vec<(&'static str, String)> {
        let mut props = vec![
            ("animation-name", self.animation_name.to_string()),
            ("animation-duration", format!("{}s", self.duration)),
            ("animation-delay", format!("{}s", self.delay)),
            ("animation-timing-function", self.timing_function.clone()),
            ("animation-iteration-count", self.iteration_count.clone()),
            ("animation-fill-mode", self.fill_mode.to_string()),
        ];
        if self.has_gradient_treatment() {
            props.extend([
                ("background", GRADIENT_FLOW_BACKGROUND.to_string()),
                ("background-size", "400% 400%".to_string()),
                ("-webkit-background-clip", "text".to_string()),
                ("-webkit-text-fill-color", "transparent".to_string()),
            ]);
        }
        props
    }

    /// The declarations joined as an inline `style` attribute value.
    pub fn inline_style(&self) -> String {
        self.style_properties()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Sample playback at `elapsed` seconds since the element was mounted.
    pub fn sample(&self, elapsed: f64) -> PlaybackSample {
        let easing = EasingFunction::from_timing_token(&self.timing_function);
        let iterations = IterationCount::from_token(&self.iteration_count);

        if elapsed < self.delay {
            return PlaybackSample {
                phase: PlaybackPhase::Pending,
                iteration: 0,
                progress: self
                    .fill_mode
                    .applies_backwards()
                    .then(|| easing.evaluate(0.0)),
            };
        }

        let active = elapsed - self.delay;
        let completed = if self.duration > 0.0 {
            active / self.duration
        } else {
            f64::INFINITY
        };

        if self.duration > 0.0 && iterations.should_continue(completed) {
            return PlaybackSample {
                phase: PlaybackPhase::Running,
                iteration: completed.floor() as u32,
                progress: Some(easing.evaluate(completed.fract())),
            };
        }

        // Only a finite count can stop.
        let count = match iterations {
            IterationCount::Count { count } => count,
            IterationCount::Infinite => 1.0,
        };
        let final_offset = if count.fract() == 0.0 { 1.0 } else { count.fract() };
        PlaybackSample {
            phase: PlaybackPhase::Finished,
            iteration: (count.ceil() as u32).saturating_sub(1),
            progress: self
                .fill_mode
                .applies_forwards()
                .then(|| easing.evaluate(final_offset)),
        }
    }
}

/// Where playback is in its timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackPhase {
    /// Waiting out the delay.
    Pending,
    Running,
    /// All iterations have played.
    Finished,
}

/// A moment of preview playback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSample {
    pub phase: PlaybackPhase,
    /// Zero-based iteration index.
    pub iteration: u32,
    /// Eased progress through the keyframes, or `None` when the fill mode
    /// leaves the element unstyled at this moment.
    pub progress: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::configuration::ConfigField;

    fn binding(id: &str, config: impl FnOnce(AnimationConfiguration) -> AnimationConfiguration) -> PreviewBinding {
        let animation = Catalog::builtin().find(id).unwrap();
        let config = config(AnimationConfiguration::initial(animation));
        PreviewBinding::new(animation, &config, PreviewSubject::Box, 0)
    }

    #[test]
    fn test_iteration_token() {
        assert_eq!(IterationCount::from_token("infinite"), IterationCount::Infinite);
        assert_eq!(
            IterationCount::from_token("2.5"),
            IterationCount::Count { count: 2.5 }
        );
        assert_eq!(IterationCount::from_token("lots"), IterationCount::default());
        assert_eq!(IterationCount::from_token("-3"), IterationCount::default());
    }

    #[test]
    fn test_should_continue() {
        assert!(IterationCount::Infinite.should_continue(1000.0));
        assert!(IterationCount::Count { count: 3.0 }.should_continue(2.5));
        assert!(!IterationCount::Count { count: 3.0 }.should_continue(3.0));
    }

    #[test]
    fn test_style_properties() {
        let b = binding("fade-in-up", |c| c.with_field(ConfigField::Delay(0.3)));
        let props = b.style_properties();
        assert_eq!(props.len(), 6);
        assert_eq!(props[0], ("animation-name", "fade-in-up".to_string()));
        assert_eq!(props[2], ("animation-delay", "0.3s".to_string()));
        assert_eq!(props[5], ("animation-fill-mode", "both".to_string()));
    }

    #[test]
    fn test_zero_delay_is_still_stated_in_preview() {
        let b = binding("fade-in-up", |c| c);
        assert!(b.inline_style().contains("animation-delay: 0s;"));
    }

    #[test]
    fn test_gradient_treatment_only_for_text_subject() {
        let mut b = binding(GRADIENT_FLOW_ID, |c| c);
        assert!(!b.has_gradient_treatment());

        b.subject = PreviewSubject::Text;
        assert!(b.has_gradient_treatment());
        let style = b.inline_style();
        assert!(style.contains(GRADIENT_FLOW_BACKGROUND));
        assert!(style.contains("background-size: 400% 400%;"));

        let mut other = binding("jello", |c| c);
        other.subject = PreviewSubject::Text;
        assert!(!other.has_gradient_treatment());
    }

    #[test]
    fn test_sample_during_delay_respects_backwards_fill() {
        let b = binding("elastic-entrance", |c| c.with_field(ConfigField::Delay(0.5)));
        let sample = b.sample(0.2);
        assert_eq!(sample.phase, PlaybackPhase::Pending);
        assert_eq!(sample.progress, Some(0.0));

        let b = binding("elastic-entrance", |c| {
            c.with_field(ConfigField::Delay(0.5))
                .with_field(ConfigField::FillMode(FillMode::None))
        });
        assert_eq!(b.sample(0.2).progress, None);
    }

    #[test]
    fn test_sample_running_uses_easing() {
        // elastic-entrance: 1s, linear
        let b = binding("elastic-entrance", |c| c);
        let sample = b.sample(0.25);
        assert_eq!(sample.phase, PlaybackPhase::Running);
        assert_eq!(sample.iteration, 0);
        assert!((sample.progress.unwrap() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_sample_finished_respects_forwards_fill() {
        let b = binding("elastic-entrance", |c| c);
        let sample = b.sample(1.5);
        assert_eq!(sample.phase, PlaybackPhase::Finished);
        assert_eq!(sample.progress, Some(1.0));

        let b = binding("elastic-entrance", |c| {
            c.with_field(ConfigField::FillMode(FillMode::Backwards))
        });
        assert_eq!(b.sample(1.5).progress, None);
    }

    #[test]
    fn test_fractional_iterations_stop_mid_cycle() {
        let b = binding("elastic-entrance", |c| {
            c.with_field(ConfigField::IterationCount("1.5".into()))
        });
        assert_eq!(b.sample(1.25).phase, PlaybackPhase::Running);
        let done = b.sample(2.0);
        assert_eq!(done.phase, PlaybackPhase::Finished);
        assert_eq!(done.iteration, 1);
        assert!((done.progress.unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_infinite_never_finishes() {
        let b = binding("elastic-entrance", |c| c.toggle_infinite());
        let sample = b.sample(1000.25);
        assert_eq!(sample.phase, PlaybackPhase::Running);
        assert_eq!(sample.iteration, 1000);
    }
}
