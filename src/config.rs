//! Load-time configuration.
//!
//! All tuning is static: the host loads a JSON file once at startup (or takes
//! the defaults) and hands the [`Config`] to [`CameraRig`](crate::rig::CameraRig)
//! construction. Missing fields fall back to their defaults individually, so a
//! config file only needs to name what it overrides.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CLICK_TO_DRAG_DURATION, DEFAULT_EXTRA_BORDER, DEFAULT_PAN_SPEED};

/// Gesture classifier tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Seconds a press must be held before it is promoted to a drag.
    /// The boundary is inclusive: a hold of exactly this duration drags.
    pub click_to_drag_duration: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_to_drag_duration: DEFAULT_CLICK_TO_DRAG_DURATION,
        }
    }
}

/// Which way the camera moves relative to the finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragDirection {
    /// Content follows the finger: the camera moves opposite to the drag
    /// delta. This is the usual touch convention.
    Natural,
    /// The camera moves with the drag delta.
    Inverted,
}

/// How a drag delta is applied to the camera position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanSmoothing {
    /// Apply the full delta the frame it arrives.
    Immediate,
    /// Interpolate toward the target with factor `dt * speed` per frame.
    Smoothed,
}

/// Camera panner tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanConfig {
    /// Smoothing speed; only used with [`PanSmoothing::Smoothed`].
    pub speed: f32,
    /// World-space padding added outside the tightest box enclosing scene
    /// content when bounds are computed.
    pub extra_border: Vec2,
    pub smoothing: PanSmoothing,
    pub direction: DragDirection,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_PAN_SPEED,
            extra_border: DEFAULT_EXTRA_BORDER,
            smoothing: PanSmoothing::Smoothed,
            direction: DragDirection::Natural,
        }
    }
}

/// Top-level configuration handed to rig construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gesture: GestureConfig,
    pub pan: PanConfig,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults (with a warning) if the
    /// file is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("using default config: {e:#}");
                Self::default()
            }
        }
    }
}
