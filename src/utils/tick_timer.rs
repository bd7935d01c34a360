use std::time::{Duration, Instant};

/// Decides when the next tick is due, like a repeating interval timer.
pub struct TickTimer {
    interval: Duration,
    last_tick: Instant,
    tick_rate_smoothed: f64,
}

impl TickTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
            tick_rate_smoothed: 1. / interval.as_secs_f64(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Measured ticks per second.
    pub fn tick_rate(&self) -> f64 {
        self.tick_rate_smoothed
    }

    /// Restarts the countdown; the first tick comes one full interval after `now`.
    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Time left until the next tick (zero if already due).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Returns `true` and starts the next interval if a tick is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < self.interval {
            return false;
        }
        let secs = elapsed.as_secs_f64();
        self.tick_rate_smoothed += (1. / secs - self.tick_rate_smoothed) * 0.1;
        self.last_tick = now;
        true
    }
}
