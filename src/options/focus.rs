use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Focus", inline)]
#[serde(default)]
/// How a picked-up photo is presented.
pub struct FocusOptions {
    /// Reading position in the container's local space.
    #[schemars(skip)]
    pub local_position: [f32; 3],
    /// World point whose distance from the eye defines the focal plane.
    #[schemars(skip)]
    pub focal_point: [f32; 3],
    /// Fraction of the visible extent a focused photo may fill.
    #[schemars(title = "Fill", range(min = 0.1, max = 1.0), extend("step" = 0.01))]
    pub fill: f32,
    /// Extra multiplier on the fitted scale.
    #[schemars(skip)]
    pub margin: f32,
    /// Draw order reported for focused photos.
    #[schemars(skip)]
    pub render_order: i32,
    /// Whether focusing one photo returns all others to the wall.
    #[schemars(title = "Exclusive Focus")]
    pub exclusive: bool,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            local_position: [0.0, -1.0, 8.4],
            focal_point: [0.0, 0.0, 3.5],
            fill: 0.98,
            margin: 1.0,
            render_order: 1000,
            exclusive: false,
        }
    }
}
