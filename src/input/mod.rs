//! Pointer input handling - gesture classification and projection.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine ([`GestureState`]) to
//! track the press-release cycle. This makes impossible states
//! unrepresentable and guarantees each cycle resolves to exactly one of
//! click or drag.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `classifier` - Per-frame tick that samples input and emits events
//! - `coords` - Screen/world projection seam and an orthographic default

pub mod coords;
mod classifier;
mod state;

pub use classifier::GestureClassifier;
pub use coords::{OrthoProjection, ScreenToWorld};
pub use state::GestureState;
