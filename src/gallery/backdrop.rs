use glam::Vec2;

use crate::camera::CameraPose;
use crate::geometry::{cover_fit, visible_extent};

/// Full-bleed background plane behind the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    /// World z of the plane.
    z: f32,
    /// Image width / height, once measured.
    aspect: Option<f32>,
}

impl Backdrop {
    /// Backdrop plane at world `z`.
    #[must_use]
    pub fn new(z: f32) -> Self {
        Self { z, aspect: None }
    }

    /// World z of the plane.
    #[must_use]
    pub fn z(&self) -> f32 {
        self.z
    }

    /// Record the backdrop image's pixel size. Empty sizes are ignored.
    pub fn set_image_size(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = Some(width as f32 / height as f32);
        true
    }

    /// Plane size that fills the view for this camera.
    ///
    /// Cover-fits the image once its size is known; until then the plane is
    /// exactly the visible extent. `None` when the plane is not in front of
    /// the eye.
    #[must_use]
    pub fn plane_size(&self, camera: &CameraPose) -> Option<Vec2> {
        let distance = camera.eye.z - self.z;
        let extent = visible_extent(camera.fovy, camera.aspect, distance)?;
        Some(match self.aspect {
            Some(aspect) => cover_fit(aspect, extent),
            None => extent,
        })
    }
}
