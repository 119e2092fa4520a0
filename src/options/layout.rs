use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Wall and photo dimensions.
pub struct LayoutOptions {
    /// Height of every photo in world units; width follows the image aspect.
    #[schemars(title = "Photo Height", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub photo_height: f32,
    /// Border added around each photo on both axes.
    #[schemars(title = "Frame Border", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub frame_border: f32,
    /// World position of the container photos are pinned to.
    #[schemars(skip)]
    pub group_position: [f32; 3],
    /// World z of the full-bleed backdrop plane.
    #[schemars(skip)]
    pub backdrop_z: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            photo_height: 2.5,
            frame_border: 0.1,
            group_position: [0.0, 1.0, -4.0],
            backdrop_z: -5.0,
        }
    }
}
