use glam::{Affine3A, Quat, Vec3};

use super::ray::Plane;

/// World transform of the container that photos are pinned to.
///
/// Photo rest positions live in this frame's local space, on its z = 0
/// plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentFrame {
    /// World-space position of the container origin.
    pub translation: Vec3,
    /// World-space orientation of the container.
    pub rotation: Quat,
    /// Per-axis scale of the container.
    pub scale: Vec3,
}

impl ParentFrame {
    /// Unscaled, unrotated frame at `translation`.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    /// Return a copy with the given orientation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    fn affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        )
    }

    /// Map a world-space point into the container's local space.
    #[must_use]
    pub fn world_to_local(&self, point: Vec3) -> Vec3 {
        self.affine().inverse().transform_point3(point)
    }

    /// Map a local-space point into world space.
    #[must_use]
    pub fn local_to_world(&self, point: Vec3) -> Vec3 {
        self.affine().transform_point3(point)
    }

    /// The container's local z = 0 plane expressed in world space.
    #[must_use]
    pub fn local_xy_plane(&self) -> Plane {
        Plane::from_normal_and_point(self.rotation * Vec3::Z, self.translation)
    }
}

impl Default for ParentFrame {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}
