//! Plane-constrained dragging.
//!
//! A drag slides a photo across its parent's local z = 0 plane. At
//! pointer-down the pointer ray is intersected with that plane and the
//! offset between the photo and the hit point is remembered, so the photo
//! keeps its grip point under the pointer instead of jumping to it.

use glam::Vec3;

use crate::geometry::{ParentFrame, Plane, Ray};
use crate::input::PointerId;

/// Transient state of one in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer that owns the drag.
    pointer: PointerId,
    /// Parent's local z = 0 plane in world space, fixed at drag start.
    plane: Plane,
    /// Rest position minus the local-space hit point at drag start.
    offset: Vec3,
    /// Whether any update has moved the photo.
    moved: bool,
}

impl DragSession {
    /// Start a drag for a photo resting at `rest` (parent-local).
    ///
    /// Returns `None` when the ray never meets the drag plane.
    #[must_use]
    pub fn begin(
        pointer: PointerId,
        rest: Vec3,
        ray: &Ray,
        parent: &ParentFrame,
    ) -> Option<Self> {
        let plane = parent.local_xy_plane();
        let hit = ray.intersect_plane(&plane)?;
        let local = parent.world_to_local(hit);
        Some(Self {
            pointer,
            plane,
            offset: rest - local,
            moved: false,
        })
    }

    /// New rest position for the pointer ray, with z pinned to 0.
    ///
    /// Returns `None` (keep the previous position) when the ray misses the
    /// drag plane. `current` is the photo's rest position before this move
    /// and decides whether the move counts as a drag.
    pub fn update(
        &mut self,
        ray: &Ray,
        parent: &ParentFrame,
        current: Vec3,
    ) -> Option<Vec3> {
        let hit = ray.intersect_plane(&self.plane)?;
        let local = parent.world_to_local(hit);
        let position = (local + self.offset).with_z(0.0);
        if position != current {
            self.moved = true;
        }
        Some(position)
    }

    /// Pointer that owns this drag.
    #[must_use]
    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    /// Grip offset recorded at drag start.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Whether the photo moved during this drag.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    /// Ray from above the plane straight down onto world `(x, y, 0)`.
    fn ray_to(x: f32, y: f32) -> Ray {
        Ray::new(Vec3::new(x, y, 10.0), Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn offset_keeps_grip_point() {
        let parent = ParentFrame::default();
        let mut session =
            DragSession::begin(PointerId(0), Vec3::ZERO, &ray_to(1.0, 1.0), &parent)
                .unwrap();
        assert!((session.offset() - Vec3::new(-1.0, -1.0, 0.0)).length() < 1e-6);

        let next = session.update(&ray_to(2.0, 3.0), &parent, Vec3::ZERO).unwrap();
        assert!((next - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-6);
        assert!(session.has_moved());
    }

    #[test]
    fn parallel_ray_does_not_start() {
        let parent = ParentFrame::default();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::X);
        assert!(DragSession::begin(PointerId(0), Vec3::ZERO, &ray, &parent).is_none());
    }

    #[test]
    fn missed_update_keeps_position() {
        let parent = ParentFrame::default();
        let mut session =
            DragSession::begin(PointerId(0), Vec3::ZERO, &ray_to(0.0, 0.0), &parent)
                .unwrap();
        let parallel = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Y);
        assert_eq!(session.update(&parallel, &parent, Vec3::ZERO), None);
        assert!(!session.has_moved());
    }

    #[test]
    fn unchanged_position_is_not_a_move() {
        let parent = ParentFrame::default();
        let mut session =
            DragSession::begin(PointerId(0), Vec3::ZERO, &ray_to(0.5, 0.5), &parent)
                .unwrap();
        let same = session.update(&ray_to(0.5, 0.5), &parent, Vec3::ZERO).unwrap();
        assert!(same.length() < 1e-6);
        assert!(!session.has_moved());
    }

    #[test]
    fn translated_parent_works_in_local_space() {
        let parent = ParentFrame::from_translation(Vec3::new(0.0, 1.0, -4.0));
        let rest = Vec3::new(2.0, 2.0, 0.0);
        let down = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let mut session =
            DragSession::begin(PointerId(0), rest, &down, &parent).unwrap();
        // Hit (0, 0, -4) world is (0, -1, 0) local
        assert!((session.offset() - Vec3::new(2.0, 3.0, 0.0)).length() < 1e-5);

        let aim = Vec3::new(1.0, 1.0, -4.0) - down.origin;
        let next = session
            .update(&Ray::new(down.origin, aim), &parent, rest)
            .unwrap();
        assert!((next - Vec3::new(3.0, 3.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn tilted_parent_pins_z_to_zero() {
        let parent = ParentFrame::from_translation(Vec3::new(0.0, 0.0, -4.0))
            .with_rotation(Quat::from_rotation_x(-0.4));
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let mut session = DragSession::begin(
            PointerId(0),
            Vec3::ZERO,
            &Ray::new(eye, Vec3::new(0.0, 0.1, -1.0)),
            &parent,
        )
        .unwrap();
        let next = session
            .update(&Ray::new(eye, Vec3::new(0.2, -0.1, -1.0)), &parent, Vec3::ZERO)
            .unwrap();
        assert_eq!(next.z, 0.0);
        assert!(session.has_moved());
    }
}
