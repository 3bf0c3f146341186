//! Centralized viewport options with TOML preset support.
//!
//! All tweakable settings (navigation feel, initial camera, display) are
//! consolidated here. Options serialize to/from TOML so a viewer can be
//! launched with a preset file.

mod camera;
mod display;
mod navigation;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use navigation::NavigationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GlideError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[navigation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Pan inertia and zoom tuning.
    pub navigation: NavigationOptions,
    /// Initial camera placement.
    pub camera: CameraOptions,
    /// Background, grid and diagnostics.
    pub display: DisplayOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GlideError::Io`] if the file cannot be read, or
    /// [`GlideError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, GlideError> {
        let content = std::fs::read_to_string(path).map_err(GlideError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GlideError::OptionsParse`] on malformed TOML or mistyped
    /// fields.
    pub fn from_toml(content: &str) -> Result<Self, GlideError> {
        toml::from_str(content)
            .map_err(|e| GlideError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GlideError::Io`] if the file or its parent directory
    /// cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), GlideError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlideError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlideError::Io)?;
        }
        std::fs::write(path, content).map_err(GlideError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
