//! Code generation for exporting a configured animation.
//!
//! Two output forms are supported:
//! - **Style sheet**: an `@keyframes` block plus an `.animate-<id>` rule using
//!   the `animation` shorthand.
//! - **Utility config**: a `tailwind.config.js` module that registers the
//!   keyframes and a named animation under `theme.extend`.
//!
//! The forms are deliberately asymmetric: the utility animation value carries
//! no delay and no iteration count.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::AnimationDefinition;
use crate::configuration::AnimationConfiguration;
use crate::error::{CatalogError, Result};

/// Indentation applied to keyframe lines in the utility form.
const UTILITY_KEYFRAME_INDENT: &str = "          ";

/// Which textual form to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeFormat {
    /// Utility-framework configuration module.
    #[default]
    Utility,
    /// Plain style sheet.
    StyleSheet,
}

impl CodeFormat {
    /// File extension of the export artifact.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Utility => "js",
            Self::StyleSheet => "css",
        }
    }

    /// Tab label shown by the code viewer.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utility => "Tailwind",
            Self::StyleSheet => "CSS",
        }
    }

    /// Export file name for an animation, `<id>.<ext>`.
    pub fn file_name(&self, animation: &AnimationDefinition) -> String {
        format!("{}.{}", animation.id, self.extension())
    }

    /// Render an animation and configuration in this form.
    pub fn render(&self, animation: &AnimationDefinition, config: &AnimationConfiguration) -> String {
        match self {
            Self::Utility => render_utility_config_form(animation, config),
            Self::StyleSheet => render_style_sheet_form(animation, config),
        }
    }
}

impl fmt::Display for CodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CodeFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "js" | "tailwind" | "utility" => Ok(Self::Utility),
            "css" | "stylesheet" | "style_sheet" => Ok(Self::StyleSheet),
            _ => Err(CatalogError::UnknownFormat(s.to_string())),
        }
    }
}

/// Build the `animation` shorthand value used by the style-sheet form.
///
/// Token order: name, duration, timing, delay (only when positive),
/// iteration count, fill mode.
pub fn animation_shorthand(animation: &AnimationDefinition, config: &AnimationConfiguration) -> String {
    let mut tokens = vec![
        animation.id.to_string(),
        seconds(config.duration),
        config.timing_function.clone(),
    ];
    if config.delay > 0.0 {
        tokens.push(seconds(config.delay));
    }
    tokens.push(config.iteration_count.clone());
    tokens.push(config.fill_mode.to_string());
    tokens.join(" ")
}

/// Build the named-animation value used by the utility form.
pub fn utility_animation_value(
    animation: &AnimationDefinition,
    config: &AnimationConfiguration,
) -> String {
    [
        animation.id.to_string(),
        seconds(config.duration),
        config.timing_function.clone(),
        config.fill_mode.to_string(),
    ]
    .join(" ")
}

/// Render the `@keyframes` block and `.animate-<id>` rule.
pub fn render_style_sheet_form(
    animation: &AnimationDefinition,
    config: &AnimationConfiguration,
) -> String {
    format!(
        "@keyframes {id} {{{body}}}\n\n.animate-{id} {{\n  animation: {shorthand};\n}}",
        id = animation.id,
        body = animation.keyframes,
        shorthand = animation_shorthand(animation, config),
    )
}

/// Render a `tailwind.config.js` module extending the theme.
pub fn render_utility_config_form(
    animation: &AnimationDefinition,
    config: &AnimationConfiguration,
) -> String {
    let keyframe_lines = animation
        .keyframes
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("{UTILITY_KEYFRAME_INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "// tailwind.config.js
module.exports = {{
  theme: {{
    extend: {{
      keyframes: {{
        '{id}': {{
{keyframe_lines}
        }},
      }},
      animation: {{
        '{id}': '{value}',
      }},
    }},
  }},
}};",
        id = animation.id,
        value = utility_animation_value(animation, config),
    )
}

/// Format seconds in shortest decimal form with an `s` suffix.
fn seconds(value: f64) -> String {
    format!("{value}s")
}
