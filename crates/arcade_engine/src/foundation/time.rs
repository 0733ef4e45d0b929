//! Time management utilities

use std::time::{Duration, Instant};

/// High-precision timer for frame timing
pub struct Timer {
    last_frame: Instant,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.total_time += elapsed.as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

/// Caps the loop at a fixed number of ticks per second
///
/// Each call to [`FrameLimiter::wait`] blocks until one tick period has
/// passed since the previous call returned. A frame that overruns its period
/// is not made up for later.
pub struct FrameLimiter {
    period: Duration,
    last_tick: Instant,
}

impl FrameLimiter {
    /// Create a limiter for the given tick rate
    ///
    /// A rate of zero disables pacing.
    pub fn new(ticks_per_second: u32) -> Self {
        let period = if ticks_per_second == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / ticks_per_second
        };
        Self {
            period,
            last_tick: Instant::now(),
        }
    }

    /// Length of one tick
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in the current tick, zero when it has already elapsed
    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.last_tick.elapsed())
    }

    /// Block until the current tick period has elapsed
    ///
    /// Returns how long the call slept.
    pub fn wait(&mut self) -> Duration {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
        remaining
    }
}
