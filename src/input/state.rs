//! Gesture state machine - explicit state for the press-release cycle.
//!
//! A single data-carrying enum replaces the scattered boolean flags a naive
//! port would use (`is_click`, `is_drag`, a timer field), making impossible
//! states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle         -> PendingClick   (press begins; records down position)
//! PendingClick -> Dragging       (held duration reaches the drag threshold)
//! PendingClick -> Idle           (released early - resolves to a click)
//! Dragging     -> Idle           (released - resolves to drag end)
//! ```

use glam::Vec2;

/// Where the classifier is within the current press-release cycle.
///
/// Owned exclusively by [`GestureClassifier`](super::GestureClassifier);
/// exposed read-only for inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No press in progress.
    Idle,

    /// Pressed, but not yet held long enough to count as a drag.
    PendingClick {
        /// World-space position where the press began.
        down_position: Vec2,
        /// Seconds the press has been held so far.
        held: f32,
    },

    /// Held past the drag threshold; every frame emits a drag delta.
    Dragging {
        /// World-space position of the previous frame's sample, the base for
        /// the next delta.
        last_position: Vec2,
    },
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}

impl GestureState {
    /// Returns true if no press is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a press is held but not yet a drag.
    pub fn is_pending_click(&self) -> bool {
        matches!(self, Self::PendingClick { .. })
    }

    /// Returns true if a drag is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true if the pointer is held in any form.
    pub fn is_pressed(&self) -> bool {
        !self.is_idle()
    }

    /// The press position, while a press is pending.
    pub fn down_position(&self) -> Option<Vec2> {
        match self {
            Self::PendingClick { down_position, .. } => Some(*down_position),
            _ => None,
        }
    }

    /// The previous drag sample, while dragging.
    pub fn last_drag_position(&self) -> Option<Vec2> {
        match self {
            Self::Dragging { last_position } => Some(*last_position),
            _ => None,
        }
    }
}
