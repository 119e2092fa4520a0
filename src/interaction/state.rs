//! Per-photo interaction state machine.
//!
//! ```text
//!            enter              primary down
//!   Idle  ─────────▶ Hovered ───────────────▶ Dragging
//!    ▲  ◀───────────   │                        │
//!    │      leave      │ primary down           │ up / capture lost
//!    │                 ▼                        ▼
//!    └──────────────────────────────────────── Idle
//!
//!   up without a move after a drag start  ──▶ Active
//!   up after a press on an Active photo   ──▶ Idle
//! ```

use glam::Vec3;

use super::drag::DragSession;
use crate::geometry::{ParentFrame, Ray};
use crate::input::{CursorHint, PointerButton, PointerId};

/// Where a photo is in its interaction lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// Resting on the wall.
    #[default]
    Idle,
    /// Pointer over the photo, not pressed.
    Hovered,
    /// Being dragged across the wall.
    Dragging,
    /// Picked up and enlarged for reading.
    Active,
}

/// What a pointer-down did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Nothing changed (wrong button, already dragging, or ray missed the
    /// wall).
    Ignored,
    /// A drag session started; the caller should capture the pointer.
    DragStarted,
    /// A press on an Active photo was recorded; the matching release is a
    /// click.
    PressRecorded,
}

/// What a pointer-up did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The pointer had no press on this photo.
    Ignored,
    /// A drag that moved the photo ended.
    Dropped,
    /// Press and release without movement: focus was toggled.
    Clicked {
        /// Whether the photo is Active after the click.
        active: bool,
    },
}

/// Interaction state plus the transient data that goes with it.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    state: InteractionState,
    pointer_over: bool,
    drag: Option<DragSession>,
    press: Option<PointerId>,
}

impl Interaction {
    /// Fresh, idle interaction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Whether the photo is focused.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == InteractionState::Active
    }

    /// Whether the photo is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == InteractionState::Dragging
    }

    /// The in-progress drag, if any.
    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Cursor this photo asks for.
    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        if self.is_dragging() {
            CursorHint::Grabbing
        } else if self.pointer_over {
            CursorHint::Grab
        } else {
            CursorHint::Auto
        }
    }

    /// Pointer entered the photo.
    pub fn pointer_enter(&mut self) {
        self.pointer_over = true;
        if self.state == InteractionState::Idle {
            self.state = InteractionState::Hovered;
        }
    }

    /// Pointer left the photo.
    pub fn pointer_leave(&mut self) {
        self.pointer_over = false;
        if self.state == InteractionState::Hovered {
            self.state = InteractionState::Idle;
        }
    }

    /// Pointer pressed on the photo resting at `rest`.
    pub fn pointer_down(
        &mut self,
        pointer: PointerId,
        button: PointerButton,
        rest: Vec3,
        ray: &Ray,
        parent: &ParentFrame,
    ) -> PressOutcome {
        if button != PointerButton::Primary {
            return PressOutcome::Ignored;
        }
        match self.state {
            InteractionState::Active => {
                self.press = Some(pointer);
                PressOutcome::PressRecorded
            }
            InteractionState::Dragging => PressOutcome::Ignored,
            InteractionState::Idle | InteractionState::Hovered => {
                match DragSession::begin(pointer, rest, ray, parent) {
                    Some(session) => {
                        self.drag = Some(session);
                        self.state = InteractionState::Dragging;
                        PressOutcome::DragStarted
                    }
                    None => PressOutcome::Ignored,
                }
            }
        }
    }

    /// Pointer moved while (possibly) dragging. Returns the new rest
    /// position when the drag moved the photo.
    pub fn pointer_move(
        &mut self,
        pointer: PointerId,
        ray: &Ray,
        parent: &ParentFrame,
        rest: Vec3,
    ) -> Option<Vec3> {
        let session = self.drag.as_mut().filter(|s| s.pointer() == pointer)?;
        session.update(ray, parent, rest)
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, pointer: PointerId) -> ReleaseOutcome {
        if let Some(session) = self.end_drag(pointer) {
            if session.has_moved() {
                return ReleaseOutcome::Dropped;
            }
            self.state = InteractionState::Active;
            return ReleaseOutcome::Clicked { active: true };
        }
        if self.is_active() && self.press == Some(pointer) {
            self.press = None;
            self.state = InteractionState::Idle;
            return ReleaseOutcome::Clicked { active: false };
        }
        ReleaseOutcome::Ignored
    }

    /// The host revoked capture of `pointer`. Ends a drag it owned, keeping
    /// the last position. Returns whether a drag ended.
    pub fn capture_lost(&mut self, pointer: PointerId) -> bool {
        self.end_drag(pointer).is_some()
    }

    /// Drop a press recorded for `pointer` without treating it as a click.
    pub fn forget_press(&mut self, pointer: PointerId) {
        if self.press == Some(pointer) {
            self.press = None;
        }
    }

    /// Leave the Active state without a click (exclusive focus).
    /// Returns whether the photo was Active.
    pub fn deactivate(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.press = None;
        self.state = InteractionState::Idle;
        true
    }

    fn end_drag(&mut self, pointer: PointerId) -> Option<DragSession> {
        if self.drag.as_ref()?.pointer() != pointer {
            return None;
        }
        self.state = InteractionState::Idle;
        self.drag.take()
    }
}
