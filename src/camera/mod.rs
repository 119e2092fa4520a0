//! Camera pose consumed by the wall.
//!
//! The host owns the real camera (projection, controls, GPU uniforms); the
//! wall only reads its position, field of view and aspect each frame.

/// Camera pose struct.
pub mod core;

pub use self::core::CameraPose;
