use glam::Vec3;

/// Perspective camera pose supplied by the host every frame.
///
/// Read-only to the wall: the host owns the camera and hands over a fresh
/// copy with each [`Gallery::update`](crate::gallery::Gallery::update).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
}

impl CameraPose {
    /// Create a pose from its parts.
    #[must_use]
    pub fn new(eye: Vec3, fovy: f32, aspect: f32) -> Self {
        Self { eye, fovy, aspect }
    }

    /// Distance from the eye to a world-space point.
    #[must_use]
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.eye.distance(point)
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            fovy: 75.0,
            aspect: 16.0 / 9.0,
        }
    }
}
