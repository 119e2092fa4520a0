//! Photo interaction: the Idle/Hovered/Dragging/Active state machine, plane
//! dragging, and click-versus-drag disambiguation.

/// Plane-constrained drag sessions.
pub mod drag;
/// Per-photo interaction state machine.
pub mod state;

pub use drag::DragSession;
pub use state::{Interaction, InteractionState, PressOutcome, ReleaseOutcome};
