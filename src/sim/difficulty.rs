//! Difficulty ramp
//!
//! Scroll speed starts at a baseline and goes up by one for every multiple
//! of [`POINTS_PER_SPEED_STEP`] the score passes. The player's own speed
//! only depends on turbo.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tracks the current scroll speed for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Difficulty {
    baseline: u32,
    scroll_speed: u32,
}

impl Difficulty {
    pub fn new(baseline: u32) -> Self {
        Self {
            baseline,
            scroll_speed: baseline,
        }
    }

    /// Pixels per tick the road and everything on it moves down
    #[inline]
    pub fn scroll_speed(&self) -> u32 {
        self.scroll_speed
    }

    #[inline]
    pub fn baseline(&self) -> u32 {
        self.baseline
    }

    /// Player car speed for this tick
    #[inline]
    pub fn vehicle_speed(turbo: bool) -> u32 {
        if turbo { TURBO_SPEED } else { CAR_SPEED }
    }

    /// Apply a score change; returns how many speed steps were gained
    pub fn on_score(&mut self, old_score: u64, new_score: u64) -> u32 {
        let steps = (new_score / POINTS_PER_SPEED_STEP)
            .saturating_sub(old_score / POINTS_PER_SPEED_STEP) as u32;
        if steps > 0 {
            self.scroll_speed += steps;
            log::debug!(
                "Score {} -> scroll speed {}",
                new_score,
                self.scroll_speed
            );
        }
        steps
    }

    /// Stop all scrolling (crash)
    pub fn freeze(&mut self) {
        self.scroll_speed = 0;
    }

    pub fn reset(&mut self) {
        self.scroll_speed = self.baseline;
    }
}
