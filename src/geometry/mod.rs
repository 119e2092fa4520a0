//! Geometry helpers: viewport fitting, ray/plane intersection and the
//! parent container's coordinate frame.

/// Cover/contain sizing against a camera's visible extent.
pub mod fit;
/// Parent container transform and world↔local conversion.
pub mod frame;
/// Pointer rays and planes.
pub mod ray;

pub use fit::{contain_fit, cover_fit, visible_extent};
pub use frame::ParentFrame;
pub use ray::{Plane, Ray};
