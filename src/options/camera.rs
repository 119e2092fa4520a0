use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera used by hosts that do not drive their own.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Eye position in world space.
    #[schemars(skip)]
    pub eye: [f32; 3],
}

impl CameraOptions {
    /// Camera pose for a viewport of the given aspect ratio.
    #[must_use]
    pub fn pose(&self, aspect: f32) -> CameraPose {
        CameraPose::new(self.eye.into(), self.fovy, aspect)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            eye: [0.0, 0.0, 5.0],
        }
    }
}
