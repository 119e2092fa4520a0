use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
/// Smoothing of photo movement.
pub struct TransitionOptions {
    /// Approach rate in s⁻¹. Higher settles faster.
    #[schemars(title = "Rate", range(min = 1.0, max = 60.0), extend("step" = 0.5))]
    pub rate: f32,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self { rate: 12.0 }
    }
}
