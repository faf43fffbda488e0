//! Animotion settings
//!
//! This crate loads the demo driver's settings from `animotion.toml`, with
//! environment variables taking precedence over file values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default settings file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "animotion.toml";

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnimotionConfig {
    /// Initial session state
    pub session: SessionConfig,
    /// Code export settings
    pub export: ExportConfig,
}

/// Initial session state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Animation id to select at startup (falls back to the first preset)
    pub animation: Option<String>,
    /// Category filter (All, Entrance, Exit, Attention, Background, Text)
    pub category: Option<String>,
    /// Search text applied to animation names
    pub search: Option<String>,
}

/// Code export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output format: "js"/"tailwind" or "css"
    pub format: String,
    /// Directory to write `<id>.<ext>` into; nothing is written when unset
    pub dir: Option<PathBuf>,
    /// Copy the generated code to the system clipboard
    pub copy_to_clipboard: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: "js".to_string(),
            dir: None,
            copy_to_clipboard: false,
        }
    }
}

fn env_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl AnimotionConfig {
    /// Load settings from a TOML file
    ///
    /// # Returns
    /// * `Ok(AnimotionConfig)` - Successfully loaded settings
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml(&content)
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load settings from `animotion.toml` in the current directory, or
    /// defaults if the file doesn't exist or fails to parse
    pub fn load_or_default() -> Self {
        Self::load_from_file(CONFIG_FILE).unwrap_or_default()
    }

    /// Merge settings with environment variables
    ///
    /// Environment variables take precedence over file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(id) = std::env::var("ANIMOTION_ANIMATION") {
            self.session.animation = Some(id);
        }
        if let Ok(category) = std::env::var("ANIMOTION_CATEGORY") {
            self.session.category = Some(category);
        }
        if let Ok(search) = std::env::var("ANIMOTION_SEARCH") {
            self.session.search = Some(search);
        }

        if let Ok(format) = std::env::var("ANIMOTION_FORMAT") {
            self.export.format = format;
        }
        if let Ok(dir) = std::env::var("ANIMOTION_EXPORT_DIR") {
            self.export.dir = Some(PathBuf::from(dir));
        }
        if let Ok(val) = std::env::var("ANIMOTION_COPY") {
            self.export.copy_to_clipboard = env_flag(&val);
        }
    }

    /// Load settings with environment variable overrides
    ///
    /// 1. Load from animotion.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
