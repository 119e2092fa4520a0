//! Centralized wall options with TOML preset support.
//!
//! All tweakable settings (camera, layout, transition smoothing, focus
//! presentation) are consolidated here. Options serialize to/from TOML.

mod camera;
mod focus;
mod layout;
mod transition;

use std::path::Path;

pub use camera::CameraOptions;
pub use focus::FocusOptions;
pub use layout::LayoutOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::PinwallError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[focus]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial camera parameters.
    pub camera: CameraOptions,
    /// Wall and photo dimensions.
    pub layout: LayoutOptions,
    /// Movement smoothing.
    pub transition: TransitionOptions,
    /// Focused photo presentation.
    pub focus: FocusOptions,
}

impl Options {
    /// JSON Schema for host-side editors of a wall preset.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse a TOML preset. Sections and fields left out keep their
    /// defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, PinwallError> {
        toml::from_str(content).map_err(|e| PinwallError::OptionsParse(e.to_string()))
    }

    /// Read a TOML preset from `path`.
    pub fn load(path: &Path) -> Result<Self, PinwallError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml_str(&content).map_err(|e| match e {
            PinwallError::OptionsParse(msg) => {
                PinwallError::OptionsParse(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        log::info!(
            "Loaded wall preset from {} (fovy {}, rate {})",
            path.display(),
            options.camera.fovy,
            options.transition.rate
        );
        Ok(options)
    }

    /// Write the preset to `path` as pretty TOML, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), PinwallError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PinwallError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::debug!("Saved wall preset to {}", path.display());
        Ok(())
    }
}
