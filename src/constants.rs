//! Crate-wide constants.
//!
//! Centralizes magic numbers and default tuning values to make the codebase
//! more maintainable and self-documenting.

use glam::Vec2;

// ============================================================================
// Gesture Classification
// ============================================================================

/// How long (seconds) a press must be held before it is promoted to a drag.
/// A release before this resolves to a click.
pub const DEFAULT_CLICK_TO_DRAG_DURATION: f32 = 0.2;

// ============================================================================
// Camera Panning
// ============================================================================

/// Default pan smoothing speed (interpolation factor per second).
pub const DEFAULT_PAN_SPEED: f32 = 0.8;

/// Default world-space padding added outside the tightest box enclosing
/// scene content.
pub const DEFAULT_EXTRA_BORDER: Vec2 = Vec2::new(1.0, 1.0);

// ============================================================================
// Projection Defaults
// ============================================================================

/// Default scale used by [`OrthoProjection`](crate::input::OrthoProjection)
/// when none is configured.
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 100.0;

// ============================================================================
// Frame Timing
// ============================================================================

/// Target frame time for 60 FPS, in milliseconds.
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of samples kept for rolling frame-time averages.
pub const FRAME_SAMPLE_COUNT: usize = 60;
