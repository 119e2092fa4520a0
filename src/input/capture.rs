//! Exclusive pointer capture.
//!
//! Once a handler captures a pointer, every later event for that pointer is
//! routed to it regardless of what the pointer is over, until it releases
//! the capture or the host revokes it.

use rustc_hash::FxHashMap;

use super::event::PointerId;

/// Routes captured pointers to their owning handler.
#[derive(Debug, Clone)]
pub struct InputRouter<H> {
    captures: FxHashMap<PointerId, H>,
}

impl<H: Copy + Eq> InputRouter<H> {
    /// Create a router with no captures.
    #[must_use]
    pub fn new() -> Self {
        Self {
            captures: FxHashMap::default(),
        }
    }

    /// Capture `pointer` for `handler`.
    ///
    /// Returns `false` (and changes nothing) if another handler already
    /// holds the pointer.
    pub fn request_capture(&mut self, pointer: PointerId, handler: H) -> bool {
        match self.captures.get(&pointer) {
            Some(owner) if *owner != handler => false,
            _ => {
                let _ = self.captures.insert(pointer, handler);
                true
            }
        }
    }

    /// Release `pointer`, returning the handler that held it.
    pub fn release(&mut self, pointer: PointerId) -> Option<H> {
        self.captures.remove(&pointer)
    }

    /// Handler that currently owns `pointer`, if captured.
    #[must_use]
    pub fn route(&self, pointer: PointerId) -> Option<H> {
        self.captures.get(&pointer).copied()
    }
}

impl<H: Copy + Eq> Default for InputRouter<H> {
    fn default() -> Self {
        Self::new()
    }
}
