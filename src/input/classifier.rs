//! Per-frame gesture classification - click vs. drag.
//!
//! The classifier samples raw pointer state once per frame, runs the
//! [`GestureState`] machine, and publishes [`GestureEvent`]s on its bus. A
//! press-release cycle resolves to exactly one of:
//!
//! - `PointerDown`, `Click`, `PointerUp` (released before the threshold), or
//! - `PointerDown`, `DragStart`, `Drag`*, `DragEnd`, `PointerUp`.
//!
//! Promotion to a drag happens at the end of a tick, after the drag-delta
//! step, so the first `Drag` fires on the tick after `DragStart`.

use glam::Vec2;

use crate::config::GestureConfig;
use crate::events::EventBus;
use crate::input::coords::ScreenToWorld;
use crate::input::state::GestureState;
use crate::profile_scope;
use crate::types::{FrameInput, GestureEvent};

/// Classifies pointer input into click and drag gestures, one tick per frame.
///
/// Collaborators (the event bus and the projection) are injected; the
/// classifier owns nothing but its state machine and the last screen sample.
pub struct GestureClassifier {
    config: GestureConfig,
    events: EventBus<GestureEvent>,
    state: GestureState,
    /// Last screen-space sample, reused when the device reports no
    /// coordinate (touch release frames).
    last_screen: Vec2,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig, events: EventBus<GestureEvent>) -> Self {
        Self {
            config,
            events,
            state: GestureState::Idle,
            last_screen: Vec2::ZERO,
        }
    }

    /// Current state machine position, for inspection.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Poll one frame of pointer input and deliver any resulting gesture
    /// events synchronously before returning.
    ///
    /// `dt` is the elapsed time since the previous tick, in seconds.
    pub fn tick(&mut self, input: FrameInput, projection: &dyn ScreenToWorld, dt: f32) {
        profile_scope!("gesture_tick");

        let screen = input.position.unwrap_or(self.last_screen);
        self.last_screen = screen;
        let world = projection.screen_to_world(screen);

        if input.pressed && self.state.is_idle() {
            self.state = GestureState::PendingClick {
                down_position: world,
                held: 0.0,
            };
            tracing::trace!(?world, "pointer down");
            self.events.emit(&GestureEvent::PointerDown(world));
        } else if !input.pressed && self.state.is_pressed() {
            if self.state.is_dragging() {
                tracing::trace!(?world, "drag end");
                self.events.emit(&GestureEvent::DragEnd(world));
            } else {
                tracing::trace!(?world, "click");
                self.events.emit(&GestureEvent::Click(world));
            }
            self.state = GestureState::Idle;
            self.events.emit(&GestureEvent::PointerUp(world));
        }

        if let GestureState::Dragging { last_position } = self.state {
            let delta = world - last_position;
            self.state = GestureState::Dragging {
                last_position: world,
            };
            self.events.emit(&GestureEvent::Drag(delta));
        }

        // Hold-timer promotion runs last: DragStart fires this tick, the
        // first Drag on the next one.
        if let GestureState::PendingClick {
            down_position,
            held,
        } = self.state
        {
            let held = held + dt;
            if held >= self.config.click_to_drag_duration {
                tracing::debug!(?down_position, held, "promoted to drag");
                self.state = GestureState::Dragging {
                    last_position: down_position,
                };
                self.events.emit(&GestureEvent::DragStart(down_position));
            } else {
                self.state = GestureState::PendingClick {
                    down_position,
                    held,
                };
            }
        }
    }
}
