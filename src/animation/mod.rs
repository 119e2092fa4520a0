//! Per-frame smoothing of displayed photo poses toward their targets.

/// Reading pose for focused photos.
pub mod focus;
/// Exponential approach toward a target pose.
pub mod transition;

pub use focus::FocusTarget;
pub use transition::{Pose, TransitionEngine};
