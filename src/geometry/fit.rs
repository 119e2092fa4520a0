//! Viewport fit calculations.
//!
//! Pure functions relating a perspective camera to the world-space extent of
//! a plane facing it, and sizing content against that extent.

use glam::Vec2;

/// World-space size of the region visible on a camera-facing plane at
/// `distance` from the eye.
///
/// Returns `None` when `distance` is not strictly positive (plane behind or
/// at the eye).
#[must_use]
pub fn visible_extent(fovy_degrees: f32, aspect: f32, distance: f32) -> Option<Vec2> {
    if distance.is_nan() || distance <= 0.0 {
        return None;
    }
    let half_fov = fovy_degrees.to_radians() / 2.0;
    let height = 2.0 * half_fov.tan() * distance;
    Some(Vec2::new(height * aspect, height))
}

/// Size a plane of the given aspect ratio so it covers the whole viewport.
///
/// Content relatively wider than the viewport fits the height and overflows
/// horizontally; otherwise it fits the width and overflows vertically. The
/// result is at least the viewport on both axes and equal on one of them.
#[must_use]
pub fn cover_fit(content_aspect: f32, viewport: Vec2) -> Vec2 {
    let viewport_aspect = viewport.x / viewport.y;
    if content_aspect > viewport_aspect {
        Vec2::new(viewport.y * content_aspect, viewport.y)
    } else {
        Vec2::new(viewport.x, viewport.x / content_aspect)
    }
}

/// Uniform scale that fits `content` entirely inside `available`, multiplied
/// by `margin`.
///
/// With `margin = 1.0` the scaled content touches the box on at least one
/// axis. Callers must not pass empty content.
#[must_use]
pub fn contain_fit(content: Vec2, available: Vec2, margin: f32) -> f32 {
    let ratio = available / content;
    margin * ratio.x.min(ratio.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn visible_extent_at_ninety_degrees() {
        // tan(45°) = 1, so height = 2 * distance
        let extent = visible_extent(90.0, 2.0, 3.0).unwrap();
        assert!((extent.y - 6.0).abs() < EPS);
        assert!((extent.x - 12.0).abs() < EPS);
    }

    #[test]
    fn visible_extent_rejects_non_positive_distance() {
        assert!(visible_extent(75.0, 1.5, 0.0).is_none());
        assert!(visible_extent(75.0, 1.5, -2.0).is_none());
        assert!(visible_extent(75.0, 1.5, f32::NAN).is_none());
    }

    #[test]
    fn cover_fit_taller_content_fits_width() {
        // 1.5 < 10/5, so width is fitted and height overflows
        let plane = cover_fit(1.5, Vec2::new(10.0, 5.0));
        assert!((plane.x - 10.0).abs() < EPS);
        assert!((plane.y - 10.0 / 1.5).abs() < EPS);
    }

    #[test]
    fn cover_fit_wider_content_fits_height() {
        let plane = cover_fit(3.0, Vec2::new(10.0, 5.0));
        assert!((plane.y - 5.0).abs() < EPS);
        assert!((plane.x - 15.0).abs() < EPS);
    }

    #[test]
    fn cover_fit_always_covers_viewport() {
        let viewports = [
            Vec2::new(10.0, 5.0),
            Vec2::new(4.0, 9.0),
            Vec2::new(7.0, 7.0),
        ];
        for viewport in viewports {
            for aspect in [0.25_f32, 0.75, 1.0, 1.5, 2.0, 4.0] {
                let plane = cover_fit(aspect, viewport);
                assert!(plane.x >= viewport.x - EPS, "{aspect} {viewport}");
                assert!(plane.y >= viewport.y - EPS, "{aspect} {viewport}");
                let exact_w = (plane.x - viewport.x).abs() < EPS;
                let exact_h = (plane.y - viewport.y).abs() < EPS;
                assert!(exact_w || exact_h);
                assert!((plane.x / plane.y - aspect).abs() < EPS);
            }
        }
    }

    #[test]
    fn contain_fit_fits_inside_box() {
        let cases = [
            (Vec2::new(3.75, 2.5), Vec2::new(4.0, 3.0)),
            (Vec2::new(1.0, 4.0), Vec2::new(8.0, 2.0)),
            (Vec2::new(2.0, 2.0), Vec2::new(5.0, 5.0)),
        ];
        for (content, available) in cases {
            let scale = contain_fit(content, available, 1.0);
            let scaled = content * scale;
            assert!(scaled.x <= available.x + EPS);
            assert!(scaled.y <= available.y + EPS);
            let touches_w = (scaled.x - available.x).abs() < EPS;
            let touches_h = (scaled.y - available.y).abs() < EPS;
            assert!(touches_w || touches_h);
        }
    }

    #[test]
    fn contain_fit_applies_margin() {
        let scale = contain_fit(Vec2::new(2.0, 1.0), Vec2::new(4.0, 4.0), 0.5);
        assert!((scale - 1.0).abs() < EPS);
    }
}
