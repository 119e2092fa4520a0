//! Reading pose for a focused photo.

use glam::{Vec2, Vec3};

use super::transition::Pose;
use crate::camera::CameraPose;
use crate::geometry::{contain_fit, visible_extent};
use crate::options::FocusOptions;

/// Where an Active photo is presented and how large.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusTarget {
    /// Reading position in parent-local space.
    pub local_position: Vec3,
    /// World point whose distance from the eye sets the focal plane.
    pub focal_point: Vec3,
    /// Fraction of the visible extent the photo may occupy.
    pub fill: f32,
    /// Extra multiplier applied to the contain-fit scale.
    pub margin: f32,
}

impl FocusTarget {
    /// Build from configuration.
    #[must_use]
    pub fn from_options(options: &FocusOptions) -> Self {
        Self {
            local_position: Vec3::from_array(options.local_position),
            focal_point: Vec3::from_array(options.focal_point),
            fill: options.fill,
            margin: options.margin,
        }
    }

    /// Scale that makes a photo of `size` fit the view at the focal plane.
    ///
    /// `None` when the focal plane is at or behind the eye, or the photo has
    /// no area yet.
    #[must_use]
    pub fn scale_for(&self, camera: &CameraPose, size: Vec2) -> Option<f32> {
        if !(size.x > 0.0 && size.y > 0.0) {
            return None;
        }
        let distance = camera.distance_to(self.focal_point);
        let extent = visible_extent(camera.fovy, camera.aspect, distance)?;
        Some(contain_fit(size, extent * self.fill, self.margin))
    }

    /// Target pose for a focused photo of `size` (if known). Without a size
    /// the scale stays at `current_scale` until the image is measured.
    #[must_use]
    pub fn pose(&self, camera: &CameraPose, size: Option<Vec2>, current_scale: f32) -> Pose {
        let scale = size
            .and_then(|size| self.scale_for(camera, size))
            .unwrap_or(current_scale);
        Pose {
            position: self.local_position,
            scale,
        }
    }
}

impl Default for FocusTarget {
    fn default() -> Self {
        Self::from_options(&FocusOptions::default())
    }
}
