//! Camera panner - translates the camera anchor from drag deltas.
//!
//! The panner is a pure transform mutator: it listens for drag notifications,
//! moves its position (clamped to [`CameraBounds`] when a scene has provided
//! them), snaps back to the start position on scene reload, and suspends
//! itself while gameplay has claimed the pointer.

use std::sync::Arc;

use glam::Vec2;
use parking_lot::Mutex;

use crate::camera::bounds::CameraBounds;
use crate::config::{DragDirection, PanConfig, PanSmoothing};
use crate::events::{GameEvents, Subscription};
use crate::profile_scope;
use crate::types::{GameplayEvent, GestureEvent, SceneEvent};

pub struct CameraPanner {
    config: PanConfig,
    position: Vec2,
    start_position: Vec2,
    bounds: Option<CameraBounds>,
    pan_allowed: bool,
    /// Elapsed time of the frame currently being processed; set by
    /// `begin_frame` before any drag notification arrives.
    frame_dt: f32,
}

impl CameraPanner {
    pub fn new(config: PanConfig, start_position: Vec2) -> Self {
        Self {
            config,
            position: start_position,
            start_position,
            bounds: None,
            pan_allowed: true,
            frame_dt: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn bounds(&self) -> Option<CameraBounds> {
        self.bounds
    }

    pub fn pan_allowed(&self) -> bool {
        self.pan_allowed
    }

    /// Record this frame's elapsed time. Must run before gesture events are
    /// delivered so smoothing uses the current frame's dt.
    pub fn begin_frame(&mut self, dt: f32) {
        self.frame_dt = dt;
    }

    /// Apply one frame's world-space drag delta (current minus previous
    /// pointer sample). No-op while panning is suspended.
    pub fn apply_drag(&mut self, delta: Vec2) {
        profile_scope!("apply_drag");

        if !self.pan_allowed {
            tracing::trace!("pan suspended, ignoring drag");
            return;
        }

        let signed = match self.config.direction {
            DragDirection::Natural => -delta,
            DragDirection::Inverted => delta,
        };

        let mut target = self.position + signed;
        if let Some(bounds) = self.bounds {
            target = bounds.clamp(target);
        }

        self.position = match self.config.smoothing {
            PanSmoothing::Immediate => target,
            PanSmoothing::Smoothed => {
                let t = (self.frame_dt * self.config.speed).clamp(0.0, 1.0);
                self.position.lerp(target, t)
            }
        };
    }

    /// Snap back to the recorded start position (scene reload).
    pub fn reset(&mut self) {
        self.position = self.start_position;
    }

    /// Recompute bounds from freshly initialized scene nodes, expanded by the
    /// configured extra border. An empty node set disables clamping.
    pub fn set_scene_nodes(&mut self, nodes: &[Vec2]) {
        match CameraBounds::from_nodes(nodes, self.config.extra_border) {
            Ok(bounds) => {
                tracing::debug!(min = ?bounds.min, max = ?bounds.max, "camera bounds set");
                self.bounds = Some(bounds);
            }
            Err(e) => {
                tracing::warn!("camera bounds unavailable: {e}");
                self.bounds = None;
            }
        }
    }

    /// Suspend or resume panning (pointer claimed / released by gameplay).
    pub fn set_pan_allowed(&mut self, allowed: bool) {
        self.pan_allowed = allowed;
    }

    /// Wire a shared panner to the game's event buses.
    ///
    /// Registers the four listener concerns - drag deltas, scene reload,
    /// node-initialization bounds, and gameplay pointer claim/release - and
    /// returns the owned subscription handles. Dropping the handles detaches
    /// the panner from every bus.
    pub fn subscribe(panner: &Arc<Mutex<Self>>, events: &GameEvents) -> Vec<Subscription> {
        let on_gesture = {
            let panner = Arc::clone(panner);
            events.gestures.subscribe(move |event| {
                if let GestureEvent::Drag(delta) = event {
                    panner.lock().apply_drag(*delta);
                }
            })
        };

        let on_scene = {
            let panner = Arc::clone(panner);
            events.scene.subscribe(move |event| match event {
                SceneEvent::Loaded => panner.lock().reset(),
                SceneEvent::NodesReady(nodes) => panner.lock().set_scene_nodes(nodes),
            })
        };

        let on_gameplay = {
            let panner = Arc::clone(panner);
            events.gameplay.subscribe(move |event| match event {
                GameplayEvent::NodeTapped(_) => panner.lock().set_pan_allowed(false),
                GameplayEvent::PointerReleased => panner.lock().set_pan_allowed(true),
            })
        };

        vec![on_gesture, on_scene, on_gameplay]
    }
}
