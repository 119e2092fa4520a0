//! Input handling: pointer event types, exclusive pointer capture, and the
//! cursor hint reported back to the host.

/// Exclusive pointer capture routing.
pub mod capture;
/// Cursor shape hints.
pub mod cursor;
/// Platform-agnostic pointer events.
pub mod event;

pub use capture::InputRouter;
pub use cursor::CursorHint;
pub use event::{PointerButton, PointerEvent, PointerId};
