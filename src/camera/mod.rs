//! Camera anchor movement - panning and bounds clamping.

mod bounds;
mod panner;

pub use bounds::{BoundsError, CameraBounds};
pub use panner::CameraPanner;
