//! pancam - frame-driven pointer gesture classification and camera panning.
//!
//! Two components compose the behavior:
//!
//! - [`GestureClassifier`](input::GestureClassifier) samples raw
//!   pointer/touch input once per frame, classifies the interaction as a tap
//!   or a sustained press-and-move, and publishes typed
//!   [`GestureEvent`](types::GestureEvent)s.
//! - [`CameraPanner`](camera::CameraPanner) subscribes to drag notifications,
//!   translates the camera anchor by each delta (clamped to bounds derived
//!   from scene content), resets on scene reload, and suspends while gameplay
//!   has claimed the pointer.
//!
//! [`CameraRig`](rig::CameraRig) wires both together with owned
//! [`Subscription`](events::Subscription) handles and exposes a single
//! `tick(input, projection, dt)` the host invokes once per rendered frame.
//! Execution is single-threaded and cooperative: all notifications are
//! delivered synchronously inside the tick, so the camera position read after
//! `tick` returns already reflects this frame's input.

pub mod camera;
pub mod config;
pub mod constants;
pub mod events;
pub mod input;
pub mod logging;
pub mod perf;
pub mod rig;
pub mod types;

pub use camera::{BoundsError, CameraBounds, CameraPanner};
pub use config::{Config, DragDirection, GestureConfig, PanConfig, PanSmoothing};
pub use events::{EventBus, GameEvents, Subscription};
pub use input::{GestureClassifier, GestureState, OrthoProjection, ScreenToWorld};
pub use rig::CameraRig;
pub use types::{FrameInput, GameplayEvent, GestureEvent, SceneEvent};
