//! Centralized camera/projection/input options with TOML preset support.
//!
//! The starting poses of both cameras, the fixed projection, the edit step
//! sizes and the keybindings live here. Options serialize to/from TOML so a
//! scene setup can be stored as a preset file.

mod camera;
mod input;
mod keybindings;
mod projection;

use std::path::Path;

pub use camera::{CameraOptions, CameraPreset};
pub use input::InputOptions;
pub use keybindings::KeybindingOptions;
pub use projection::ProjectionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ExtrinsicsError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[projection]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Starting poses of the two cameras.
    pub cameras: CameraOptions,
    /// Perspective projection parameters.
    pub projection: ProjectionOptions,
    /// Edit step sizes.
    pub input: InputOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ExtrinsicsError> {
        let content = std::fs::read_to_string(path).map_err(ExtrinsicsError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults;
    /// reversed or non-finite slider ranges are rejected.
    pub fn from_toml(content: &str) -> Result<Self, ExtrinsicsError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| ExtrinsicsError::OptionsParse(e.to_string()))?;
        options.input.validate()?;
        options.keybindings.reindex();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ExtrinsicsError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ExtrinsicsError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ExtrinsicsError::Io)?;
        }
        std::fs::write(path, content).map_err(ExtrinsicsError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
