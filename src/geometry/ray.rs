use glam::Vec3;

/// Denominators below this are treated as a ray parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// World-space pointer ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin (usually the camera eye).
    pub origin: Vec3,
    /// Ray direction. Need not be normalized.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray from origin and direction.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point along the ray at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Point where the ray crosses `plane`, if it does.
    ///
    /// `None` when the ray runs parallel to the plane or the crossing lies
    /// behind the origin.
    #[must_use]
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let denom = plane.normal.dot(self.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = -plane.signed_distance(self.origin) / denom;
        if !t.is_finite() || t < 0.0 {
            return None;
        }
        Some(self.at(t))
    }
}

/// Infinite plane in Hessian normal form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed offset so that `normal · p + constant = 0` on the plane.
    pub constant: f32,
}

impl Plane {
    /// Plane through `point` with the given normal (normalized here).
    #[must_use]
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            constant: -normal.dot(point),
        }
    }

    /// Signed distance from `point` to the plane along the normal.
    #[must_use]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }
}
