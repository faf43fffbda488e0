//! The built-in animation catalog.
//!
//! This module provides:
//! - `Category`: The closed set of catalog categories (plus the `All` filter value)
//! - `AnimationDefinition`: One reusable motion effect
//! - `Catalog`: Read-only access to the fixed, process-wide list of definitions
//!
//! Keyframe bodies and timing tokens are stored as opaque CSS text. Nothing in
//! this crate parses the keyframe body; the timing token is only interpreted
//! leniently by the preview sampler.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, Result};

/// Catalog category.
///
/// `All` is a pseudo-category used as a filter value only; no definition is
/// ever assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Matches every definition when used as a filter.
    #[default]
    All,
    Entrance,
    Exit,
    Attention,
    Background,
    Text,
}

impl Category {
    /// Categories in sidebar order.
    pub const SIDEBAR: [Category; 6] = [
        Category::All,
        Category::Entrance,
        Category::Exit,
        Category::Attention,
        Category::Text,
        Category::Background,
    ];

    /// Keyword used for lookups and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Entrance => "Entrance",
            Self::Exit => "Exit",
            Self::Attention => "Attention",
            Self::Background => "Background",
            Self::Text => "Text",
        }
    }

    /// Sidebar label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Animations",
            Self::Entrance => "Entrances",
            Self::Exit => "Exits",
            Self::Attention => "Attention",
            Self::Background => "Backgrounds",
            Self::Text => "Text Effects",
        }
    }

    /// Check whether a definition in `other` passes a filter on this category.
    pub fn admits(&self, other: Category) -> bool {
        *self == Category::All || *self == other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::SIDEBAR
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// A static catalog entry describing one reusable motion effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationDefinition {
    /// Unique slug; doubles as the `@keyframes` name.
    pub id: &'static str,
    /// Human-readable label.
    pub name: &'static str,
    /// Category this definition belongs to. Never `Category::All`.
    pub category: Category,
    /// Percentage-keyed keyframe rules, kept verbatim.
    pub keyframes: &'static str,
    /// Default duration in seconds.
    pub default_duration: f64,
    /// Default timing-function token, kept verbatim.
    pub default_timing: &'static str,
}

/// Read-only view over a non-empty list of animation definitions.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [AnimationDefinition],
}

impl Catalog {
    /// The fixed catalog shipped with the library.
    pub fn builtin() -> Self {
        Self {
            entries: &ANIMATIONS,
        }
    }

    /// Wrap a custom list of definitions. Returns `None` for an empty list,
    /// since every session needs a first entry to fall back to.
    pub fn new(entries: &'static [AnimationDefinition]) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    /// All definitions in authored order.
    pub fn list(&self) -> &'static [AnimationDefinition] {
        self.entries
    }

    /// The first definition; the fallback for unknown ids.
    pub fn first(&self) -> &'static AnimationDefinition {
        &self.entries[0]
    }

    /// Look up a definition by id.
    pub fn find(&self, id: &str) -> Result<&'static AnimationDefinition> {
        self.entries
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Look up a definition by id, falling back to the first entry.
    pub fn find_or_default(&self, id: &str) -> &'static AnimationDefinition {
        match self.find(id) {
            Ok(animation) => animation,
            Err(error) => {
                tracing::debug!(%error, fallback = self.first().id, "falling back to first animation");
                self.first()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'static, AnimationDefinition> {
        self.entries.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

static ANIMATIONS: [AnimationDefinition; 15] = [
    // Entrances
    AnimationDefinition {
        id: "fade-in-up",
        name: "Fade In Up",
        category: Category::Entrance,
        default_duration: 0.6,
        default_timing: "cubic-bezier(0.16, 1, 0.3, 1)",
        keyframes: r"
      0% { opacity: 0; transform: translate3d(0, 40px, 0); }
      100% { opacity: 1; transform: translate3d(0, 0, 0); }
    ",
    },
    AnimationDefinition {
        id: "blur-in",
        name: "Blur In",
        category: Category::Entrance,
        default_duration: 0.8,
        default_timing: "ease-out",
        keyframes: r"
      0% { opacity: 0; filter: blur(20px); transform: scale(0.9); }
      100% { opacity: 1; filter: blur(0); transform: scale(1); }
    ",
    },
    AnimationDefinition {
        id: "pop-in",
        name: "Pop In",
        category: Category::Entrance,
        default_duration: 0.5,
        default_timing: "cubic-bezier(0.175, 0.885, 0.32, 1.275)",
        keyframes: r"
      0% { opacity: 0; transform: scale(0.5); }
      100% { opacity: 1; transform: scale(1); }
    ",
    },
    AnimationDefinition {
        id: "slide-in-right",
        name: "Slide In Right",
        category: Category::Entrance,
        default_duration: 0.5,
        default_timing: "cubic-bezier(0.25, 1, 0.5, 1)",
        keyframes: r"
      0% { transform: translateX(100%); opacity: 0; }
      100% { transform: translateX(0); opacity: 1; }
    ",
    },
    AnimationDefinition {
        id: "elastic-entrance",
        name: "Elastic",
        category: Category::Entrance,
        default_duration: 1.0,
        default_timing: "linear",
        keyframes: r"
      0% { opacity: 0; transform: scale3d(0.3, 0.3, 0.3); }
      20% { transform: scale3d(1.1, 1.1, 1.1); }
      40% { transform: scale3d(0.9, 0.9, 0.9); }
      60% { opacity: 1; transform: scale3d(1.03, 1.03, 1.03); }
      80% { transform: scale3d(0.97, 0.97, 0.97); }
      100% { opacity: 1; transform: scale3d(1, 1, 1); }
    ",
    },
    // Exits
    AnimationDefinition {
        id: "fade-out-down",
        name: "Fade Out Down",
        category: Category::Exit,
        default_duration: 0.5,
        default_timing: "ease-in",
        keyframes: r"
      0% { opacity: 1; }
      100% { opacity: 0; transform: translate3d(0, 40px, 0); }
    ",
    },
    AnimationDefinition {
        id: "blur-out",
        name: "Blur Out",
        category: Category::Exit,
        default_duration: 0.6,
        default_timing: "ease-in",
        keyframes: r"
      0% { opacity: 1; filter: blur(0); }
      100% { opacity: 0; filter: blur(20px); transform: scale(0.9); }
    ",
    },
    AnimationDefinition {
        id: "hinge-exit",
        name: "Hinge Exit",
        category: Category::Exit,
        default_duration: 2.0,
        default_timing: "ease-in-out",
        keyframes: r"
      0% { transform-origin: top left; animation-timing-function: ease-in-out; }
      20%, 60% { transform: rotate3d(0, 0, 1, 80deg); transform-origin: top left; animation-timing-function: ease-in-out; }
      40%, 80% { transform: rotate3d(0, 0, 1, 60deg); transform-origin: top left; animation-timing-function: ease-in-out; opacity: 1; }
      100% { transform: translate3d(0, 700px, 0); opacity: 0; }
    ",
    },
    // Attention
    AnimationDefinition {
        id: "pulse-glow",
        name: "Pulse Glow",
        category: Category::Attention,
        default_duration: 1.5,
        default_timing: "infinite",
        keyframes: r"
      0% { box-shadow: 0 0 0 0 rgba(99, 102, 241, 0.7); }
      70% { box-shadow: 0 0 0 20px rgba(99, 102, 241, 0); }
      100% { box-shadow: 0 0 0 0 rgba(99, 102, 241, 0); }
    ",
    },
    AnimationDefinition {
        id: "shake-x",
        name: "Shake X",
        category: Category::Attention,
        default_duration: 0.8,
        default_timing: "ease-in-out",
        keyframes: r"
      0%, 100% { transform: translate3d(0, 0, 0); }
      10%, 30%, 50%, 70%, 90% { transform: translate3d(-10px, 0, 0); }
      20%, 40%, 60%, 80% { transform: translate3d(10px, 0, 0); }
    ",
    },
    AnimationDefinition {
        id: "jello",
        name: "Jello",
        category: Category::Attention,
        default_duration: 0.9,
        default_timing: "both",
        keyframes: r"
      0% { transform: scale3d(1, 1, 1); }
      30% { transform: scale3d(1.25, 0.75, 1); }
      40% { transform: scale3d(0.75, 1.25, 1); }
      50% { transform: scale3d(1.15, 0.85, 1); }
      65% { transform: scale3d(0.95, 1.05, 1); }
      75% { transform: scale3d(1.05, 0.95, 1); }
      100% { transform: scale3d(1, 1, 1); }
    ",
    },
    AnimationDefinition {
        id: "bounce",
        name: "Bounce",
        category: Category::Attention,
        default_duration: 1.0,
        default_timing: "infinite",
        keyframes: r"
      0%, 20%, 50%, 80%, 100% {transform: translateY(0);}
      40% {transform: translateY(-30px);}
      60% {transform: translateY(-15px);}
    ",
    },
    // Text
    AnimationDefinition {
        id: "tracking-in",
        name: "Tracking In",
        category: Category::Text,
        default_duration: 0.7,
        default_timing: "cubic-bezier(0.215, 0.610, 0.355, 1.000)",
        keyframes: r"
      0% { letter-spacing: -0.5em; opacity: 0; }
      40% { opacity: 0.6; }
      100% { opacity: 1; }
    ",
    },
    AnimationDefinition {
        id: "gradient-flow",
        name: "Gradient Flow",
        category: Category::Text,
        default_duration: 3.0,
        default_timing: "linear infinite",
        keyframes: r"
      0% { background-position: 0% 50%; }
      50% { background-position: 100% 50%; }
      100% { background-position: 0% 50%; }
    ",
    },
    // Background
    AnimationDefinition {
        id: "ken-burns",
        name: "Ken Burns",
        category: Category::Background,
        default_duration: 10.0,
        default_timing: "ease-out infinite alternate",
        keyframes: r"
      0% { transform: scale(1) translate(0, 0); transform-origin: 16% 50%; }
      100% { transform: scale(1.25) translate(20px, 15px); transform-origin: right bottom; }
    ",
    },
];
