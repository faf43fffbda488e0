//! Animation preset catalog and code generation.
//!
//! This crate provides the model behind the Animotion editor:
//! - **Catalog**: The fixed list of animation presets
//! - **Filter**: Category and name search over the catalog
//! - **Configuration**: User-tunable timing parameters and their transitions
//! - **Codegen**: Style-sheet and utility-config renderings of a preset
//! - **Preview**: The live style binding and a playback sampler
//! - **Session**: The state object a presentation layer drives
//!
//! # Architecture
//!
//! ```text
//! Catalog (static)
//!   └── filter(category, search) ──> visible list
//!
//! Session
//!   ├── selected AnimationDefinition
//!   ├── AnimationConfiguration ──> codegen ──> export text
//!   └── PreviewBinding (replay_key) ──> preview stage
//! ```

pub mod catalog;
pub mod codegen;
pub mod configuration;
pub mod easing;
pub mod error;
pub mod filter;
pub mod preview;
pub mod session;

pub use catalog::{AnimationDefinition, Catalog, Category};
pub use codegen::{
    CodeFormat, animation_shorthand, render_style_sheet_form, render_utility_config_form,
    utility_animation_value,
};
pub use configuration::{AnimationConfiguration, ConfigField, FillMode, INFINITE, TIMING_PRESETS};
pub use easing::{EasingFunction, StepPosition};
pub use error::{CatalogError, Result};
pub use filter::filter;
pub use preview::{
    GRADIENT_FLOW_ID, IterationCount, PlaybackPhase, PlaybackSample, PreviewBinding,
    PreviewSubject,
};
pub use session::Session;
