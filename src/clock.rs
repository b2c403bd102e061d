//! Fixed-timestep pacing
//!
//! The simulation only knows ticks. Frontends feed real frame times in here
//! and get back how many ticks to run this frame.

use std::time::Duration;

use crate::consts::{MAX_SUBSTEPS, TICKS_PER_SECOND};

/// Longest frame we try to catch up on; anything beyond is dropped
const MAX_FRAME: Duration = Duration::from_millis(100);

/// Accumulates frame time into whole ticks
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    accumulator: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICKS_PER_SECOND)
    }
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / ticks_per_second.max(1),
            accumulator: Duration::ZERO,
        }
    }

    /// Duration of one tick
    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add a frame's elapsed time and return the number of ticks to run
    pub fn ticks_for(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed.min(MAX_FRAME);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            substeps += 1;
        }
        substeps
    }
}
