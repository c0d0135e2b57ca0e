//! Screen/world coordinate conversion.
//!
//! The classifier never touches raw screen coordinates beyond sampling; every
//! event position is projected into world space through the [`ScreenToWorld`]
//! seam, so the host can plug in whatever camera model it renders with.

use glam::Vec2;

use crate::constants::DEFAULT_PIXELS_PER_UNIT;

/// Camera projection seam: converts a screen-space pointer sample to world
/// space. Injected into the classifier each tick.
pub trait ScreenToWorld {
    fn screen_to_world(&self, screen: Vec2) -> Vec2;
}

/// A simple orthographic 2D projection.
///
/// Screen space has its origin at the top-left with y growing down; world
/// space has y growing up. The viewport center maps to `camera_center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoProjection {
    /// World-space position at the center of the viewport.
    pub camera_center: Vec2,
    /// Viewport size in pixels.
    pub viewport_size: Vec2,
    /// Scale factor between screen pixels and world units.
    pub pixels_per_unit: f32,
}

impl Default for OrthoProjection {
    fn default() -> Self {
        Self {
            camera_center: Vec2::ZERO,
            viewport_size: Vec2::ZERO,
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
        }
    }
}

impl OrthoProjection {
    pub fn new(camera_center: Vec2, viewport_size: Vec2, pixels_per_unit: f32) -> Self {
        Self {
            camera_center,
            viewport_size,
            pixels_per_unit,
        }
    }

    /// Convert a world position back to screen space.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let offset = (world - self.camera_center) * self.pixels_per_unit;
        Vec2::new(
            offset.x + self.viewport_size.x * 0.5,
            self.viewport_size.y * 0.5 - offset.y,
        )
    }
}

impl ScreenToWorld for OrthoProjection {
    fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let centered = Vec2::new(
            screen.x - self.viewport_size.x * 0.5,
            self.viewport_size.y * 0.5 - screen.y,
        );
        self.camera_center + centered / self.pixels_per_unit
    }
}
