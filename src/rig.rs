//! Frame driver facade wiring the classifier to the panner.
//!
//! [`CameraRig`] owns the gesture classifier, the shared camera panner, the
//! event buses, and the panner's subscriptions. The host calls
//! [`CameraRig::tick`] exactly once per rendered frame; within that call,
//! input sampling completes and every gesture notification is delivered
//! before the tick returns, so the camera position the host reads afterwards
//! already reflects this frame's drag.

use std::sync::Arc;

use glam::Vec2;
use parking_lot::Mutex;

use crate::camera::CameraPanner;
use crate::config::Config;
use crate::events::{GameEvents, Subscription};
use crate::input::{GestureClassifier, ScreenToWorld};
use crate::perf::FrameStats;
use crate::types::FrameInput;

pub struct CameraRig {
    classifier: GestureClassifier,
    panner: Arc<Mutex<CameraPanner>>,
    events: GameEvents,
    frame_stats: FrameStats,
    /// Keeps the panner attached to the buses; released on drop.
    _subscriptions: Vec<Subscription>,
}

impl CameraRig {
    /// Build a fully wired rig with the camera anchored at `start_position`.
    pub fn new(config: Config, start_position: Vec2) -> Self {
        let events = GameEvents::new();
        let classifier = GestureClassifier::new(config.gesture, events.gestures.clone());
        let panner = Arc::new(Mutex::new(CameraPanner::new(config.pan, start_position)));
        let subscriptions = CameraPanner::subscribe(&panner, &events);

        Self {
            classifier,
            panner,
            events,
            frame_stats: FrameStats::new(),
            _subscriptions: subscriptions,
        }
    }

    /// The buses the host publishes scene and gameplay notifications on (and
    /// may observe gestures from).
    pub fn events(&self) -> &GameEvents {
        &self.events
    }

    /// Shared handle to the panner, for hosts that drive it directly.
    pub fn panner(&self) -> Arc<Mutex<CameraPanner>> {
        Arc::clone(&self.panner)
    }

    pub fn camera_position(&self) -> Vec2 {
        self.panner.lock().position()
    }

    pub fn frame_stats(&self) -> &FrameStats {
        &self.frame_stats
    }

    /// Advance one frame: record dt for pan smoothing, then classify input,
    /// delivering all resulting notifications synchronously.
    pub fn tick(&mut self, input: FrameInput, projection: &dyn ScreenToWorld, dt: f32) {
        self.panner.lock().begin_frame(dt);
        self.classifier.tick(input, projection, dt);
        self.frame_stats.record_frame(dt);
    }
}
