use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::PinwallError;

/// Static description of one photo on the wall.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDescriptor {
    /// Unique id, also the position store key.
    pub id: String,
    /// Image reference handed to the host's loader.
    pub image: String,
    /// Initial rest position in the container's local space.
    pub position: [f32; 3],
}

/// Ordered list of photos, loaded from TOML:
///
/// ```toml
/// [[items]]
/// id = "1.jpg"
/// image = "/photos/1.jpg"
/// position = [-4.97, 1.66, 0.0]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GalleryConfig {
    /// Photos in draw order.
    pub items: Vec<ItemDescriptor>,
}

impl GalleryConfig {
    /// Parse and validate a gallery from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, PinwallError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| PinwallError::GalleryParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a gallery file.
    pub fn load(path: &Path) -> Result<Self, PinwallError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded {} gallery items from {}",
            config.items.len(),
            path.display()
        );
        Ok(config)
    }

    /// Reject duplicate ids.
    pub fn validate(&self) -> Result<(), PinwallError> {
        let mut seen = FxHashSet::default();
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(PinwallError::DuplicateItem(item.id.clone()));
            }
        }
        Ok(())
    }
}
