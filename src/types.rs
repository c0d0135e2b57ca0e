//! Core event and input types shared across the crate.
//!
//! The classifier, panner, and frame driver communicate exclusively through
//! these types; nothing here owns mutable state.

use glam::Vec2;

// ============================================================================
// Frame Input
// ============================================================================

/// One frame's raw pointer sample, polled once per rendered frame.
///
/// `position` is in screen coordinates. Touch devices report no coordinate on
/// the release frame; a `None` position makes the classifier reuse the last
/// sampled screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Screen-space pointer position, if the device reported one this frame.
    pub position: Option<Vec2>,
    /// Whether the primary button / any touch is currently down.
    pub pressed: bool,
}

impl FrameInput {
    /// Mouse-style input: a position is always available.
    pub fn mouse(position: Vec2, pressed: bool) -> Self {
        Self {
            position: Some(position),
            pressed,
        }
    }

    /// Touch-style input: pressed exactly while a touch exists, and the
    /// release frame carries no coordinate.
    pub fn touch(touch: Option<Vec2>) -> Self {
        Self {
            position: touch,
            pressed: touch.is_some(),
        }
    }

    /// A frame with no pointer activity at all.
    pub fn idle() -> Self {
        Self {
            position: None,
            pressed: false,
        }
    }
}

// ============================================================================
// Gesture Events
// ============================================================================

/// Discrete notifications emitted by the gesture classifier.
///
/// Positions are world-space (already projected). Within one press-release
/// cycle the delivery order is:
/// `PointerDown`, then either `Click` or `DragStart`/`Drag`*/`DragEnd`,
/// then `PointerUp`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A press began this frame.
    PointerDown(Vec2),
    /// The press was released before the drag threshold.
    Click(Vec2),
    /// The press was released; fires on every release, after Click/DragEnd.
    PointerUp(Vec2),
    /// The held duration reached the drag threshold; carries the press
    /// position.
    DragStart(Vec2),
    /// World-space displacement (current minus previous sample) for one frame
    /// of an active drag.
    Drag(Vec2),
    /// An active drag was released.
    DragEnd(Vec2),
}

// ============================================================================
// Scene & Gameplay Events
// ============================================================================

/// Scene lifecycle notifications produced by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// A scene finished (re)loading; the camera snaps back to its start
    /// position.
    Loaded,
    /// Scene nodes finished initializing; carries their world positions so
    /// the camera bounds can be computed.
    NodesReady(Vec<Vec2>),
}

/// Gameplay notifications that gate camera panning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameplayEvent {
    /// A scene object claimed the pointer (e.g. a node was tapped); panning
    /// suspends until the pointer is released back.
    NodeTapped(Vec2),
    /// The pointer was released from whatever object claimed it; panning
    /// resumes.
    PointerReleased,
}
