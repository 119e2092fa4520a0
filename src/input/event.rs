use crate::geometry::Ray;

/// Host-assigned pointer identifier (mouse, pen, or one touch contact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

/// Platform-agnostic pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (left mouse button, pen tip, touch contact).
    Primary,
    /// Secondary (right) button.
    Secondary,
    /// Middle button (wheel click).
    Middle,
}

/// Platform-agnostic pointer events.
///
/// These are fed into [`Gallery::handle_pointer`](crate::gallery::Gallery::handle_pointer)
/// together with the id of the photo under the pointer (from the host's own
/// hit testing).
///
/// # Example
///
/// ```ignore
/// gallery.handle_pointer(
///     PointerEvent::Down { pointer, button: PointerButton::Primary, ray },
///     picked.as_deref(),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed.
    Down {
        /// Pointer that was pressed.
        pointer: PointerId,
        /// Which button went down.
        button: PointerButton,
        /// World-space ray through the pointer.
        ray: Ray,
    },
    /// Pointer moved.
    Move {
        /// Pointer that moved.
        pointer: PointerId,
        /// World-space ray through the pointer.
        ray: Ray,
    },
    /// Button released.
    Up {
        /// Pointer that was released.
        pointer: PointerId,
        /// Which button came up.
        button: PointerButton,
    },
    /// Pointer entered a photo's hit area.
    Enter {
        /// Pointer that entered.
        pointer: PointerId,
    },
    /// Pointer left a photo's hit area.
    Leave {
        /// Pointer that left.
        pointer: PointerId,
    },
    /// The host revoked a pointer capture.
    CaptureLost {
        /// Pointer whose capture was revoked.
        pointer: PointerId,
    },
}

impl PointerEvent {
    /// Pointer this event belongs to.
    #[must_use]
    pub fn pointer(&self) -> PointerId {
        match *self {
            Self::Down { pointer, .. }
            | Self::Move { pointer, .. }
            | Self::Up { pointer, .. }
            | Self::Enter { pointer }
            | Self::Leave { pointer }
            | Self::CaptureLost { pointer } => pointer,
        }
    }
}
