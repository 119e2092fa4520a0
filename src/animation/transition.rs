//! Frame-rate-independent approach toward a target pose.
//!
//! Each frame moves the displayed value a fraction `min(1, rate · dt)` of
//! the remaining distance. The displayed value closes in exponentially,
//! never overshoots, and a long frame at worst lands exactly on the target.

use glam::Vec3;

/// Displayed transform of a photo, in its parent's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in parent-local space.
    pub position: Vec3,
    /// Uniform scale (1.0 = original size).
    pub scale: f32,
}

impl Pose {
    /// Pose at `position` with unit scale.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            scale: 1.0,
        }
    }
}

/// Smooths displayed poses toward their targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionEngine {
    /// Approach rate in s⁻¹.
    rate: f32,
}

impl TransitionEngine {
    /// Default approach rate (s⁻¹).
    pub const DEFAULT_RATE: f32 = 12.0;

    /// Engine with the given approach rate. Non-positive or non-finite
    /// rates fall back to [`Self::DEFAULT_RATE`].
    #[must_use]
    pub fn new(rate: f32) -> Self {
        let rate = if rate.is_finite() && rate > 0.0 {
            rate
        } else {
            log::warn!("Invalid transition rate {rate}, using {}", Self::DEFAULT_RATE);
            Self::DEFAULT_RATE
        };
        Self { rate }
    }

    /// Approach rate in s⁻¹.
    #[must_use]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Fraction of the remaining distance covered in a frame of `dt`
    /// seconds, clamped to `[0, 1]`.
    #[must_use]
    pub fn factor(&self, dt: f32) -> f32 {
        if dt.is_nan() {
            return 0.0;
        }
        (self.rate * dt).clamp(0.0, 1.0)
    }

    /// Advance `displayed` toward `target` by one frame.
    pub fn step(&self, displayed: &mut Pose, target: &Pose, dt: f32) {
        let k = self.factor(dt);
        displayed.position += (target.position - displayed.position) * k;
        displayed.scale += (target.scale - displayed.scale) * k;
        displayed.scale = displayed.scale.max(0.0);
    }
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self {
            rate: Self::DEFAULT_RATE,
        }
    }
}
