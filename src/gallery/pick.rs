//! CPU hit testing of photos against a pointer ray, for hosts without their
//! own picking.

use glam::Vec3;

use super::item::PhotoItem;
use crate::geometry::{ParentFrame, Plane, Ray};

/// Where `ray` hits `item`'s displayed photo plane, as the distance along
/// the ray, or `None` on a miss.
///
/// Unmeasured photos have no area and are never hit.
pub(crate) fn hit_distance(
    item: &PhotoItem,
    ray: &Ray,
    parent: &ParentFrame,
    photo_height: f32,
) -> Option<f32> {
    let size = item.photo_size(photo_height)?;
    let pose = item.displayed();
    if pose.scale <= 0.0 {
        return None;
    }
    let center = parent.local_to_world(pose.position);
    let normal = parent.rotation * item.rotation() * Vec3::Z;
    let hit = ray.intersect_plane(&Plane::from_normal_and_point(normal, center))?;

    let local = parent.world_to_local(hit) - pose.position;
    let on_photo = item.rotation().inverse() * local / pose.scale;
    let half = size / 2.0;
    if on_photo.x.abs() > half.x || on_photo.y.abs() > half.y {
        return None;
    }
    Some(ray.origin.distance(hit))
}
