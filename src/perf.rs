//! Performance monitoring utilities.
//!
//! Frame-time tracking for the rig's tick loop plus a zero-cost scoped
//! profiling macro for the hot paths (classifier tick, pan application).
//!
//! Enable the `profiling` feature to get per-scope trace output:
//! ```toml
//! [dependencies]
//! pancam = { features = ["profiling"] }
//! ```

use std::collections::VecDeque;

use tracing::warn;

use crate::constants::{FRAME_SAMPLE_COUNT, TARGET_FRAME_MS};

/// Frame duration multiplier that triggers a slow-frame warning.
const WARN_THRESHOLD: f64 = 2.0;

// ============================================================================
// Profiling Macro (zero-cost when disabled)
// ============================================================================

/// Time a scope and emit a `trace!` with its duration. Compiles to nothing
/// without the `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _scope_timer = $crate::perf::ScopeTimer::new($name);
    };
}

/// RAII timer backing [`profile_scope!`].
#[cfg(feature = "profiling")]
pub struct ScopeTimer {
    name: &'static str,
    start: std::time::Instant,
}

#[cfg(feature = "profiling")]
impl ScopeTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "profiling")]
impl Drop for ScopeTimer {
    fn drop(&mut self) {
        let elapsed_us = self.start.elapsed().as_micros();
        tracing::trace!(scope = self.name, elapsed_us, "profile scope");
    }
}

// ============================================================================
// Frame Statistics
// ============================================================================

/// Rolling frame-time statistics fed by the frame driver.
#[derive(Debug, Default)]
pub struct FrameStats {
    samples: VecDeque<f64>,
    frame_count: u64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame's elapsed time, in seconds.
    pub fn record_frame(&mut self, dt: f32) {
        let ms = f64::from(dt) * 1000.0;
        if self.samples.len() == FRAME_SAMPLE_COUNT {
            self.samples.pop_front();
        }
        self.samples.push_back(ms);
        self.frame_count += 1;

        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            warn!(frame_ms = ms, "slow frame");
        }
    }

    /// Rolling average frame time in milliseconds, or `None` before the
    /// first frame.
    pub fn average_frame_ms(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }

    /// Frames per second implied by the rolling average.
    pub fn fps(&self) -> Option<f64> {
        self.average_frame_ms().map(|ms| 1000.0 / ms)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
