//! Tick pacing
//!
//! `TickInterval` is the player-adjustable delay between ticks. `TickClock`
//! turns elapsed wall time into a count of due ticks, the way a fixed
//! timestep accumulator does.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Milliseconds between ticks, clamped to [min_ms, max_ms]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInterval {
    ms: u32,
    min_ms: u32,
    max_ms: u32,
}

impl Default for TickInterval {
    fn default() -> Self {
        Self::new(TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS)
    }
}

impl TickInterval {
    /// `ms` is clamped into the bounds. Bounds are swapped if given backwards.
    pub fn new(ms: u32, min_ms: u32, max_ms: u32) -> Self {
        let (min_ms, max_ms) = if min_ms <= max_ms {
            (min_ms, max_ms)
        } else {
            (max_ms, min_ms)
        };
        Self {
            ms: ms.clamp(min_ms, max_ms),
            min_ms,
            max_ms,
        }
    }

    pub fn ms(&self) -> u32 {
        self.ms
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.min_ms, self.max_ms)
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.ms))
    }

    /// Shift the interval by `delta_ms` and clamp. Negative is faster.
    /// Returns the new interval.
    pub fn adjust(&mut self, delta_ms: i32) -> u32 {
        let target = i64::from(self.ms) + i64::from(delta_ms);
        self.ms = target.clamp(i64::from(self.min_ms), i64::from(self.max_ms)) as u32;
        self.ms
    }
}

/// Fixed-step accumulator driving ticks from frame or sleep timings
#[derive(Debug, Clone, Default)]
pub struct TickClock {
    accumulator_ms: f64,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed_ms` and return how many ticks are due at `interval`.
    ///
    /// At most `MAX_CATCHUP_TICKS` are returned; backlog beyond that is dropped.
    pub fn advance(&mut self, elapsed_ms: f64, interval: &TickInterval) -> u32 {
        let step = f64::from(interval.ms().max(1));
        self.accumulator_ms += elapsed_ms.max(0.0);

        let mut due = 0;
        while self.accumulator_ms >= step && due < MAX_CATCHUP_TICKS {
            self.accumulator_ms -= step;
            due += 1;
        }
        if due == MAX_CATCHUP_TICKS && self.accumulator_ms >= step {
            log::debug!("Dropping {:.0} ms of tick backlog", self.accumulator_ms);
            self.accumulator_ms %= step;
        }
        due
    }

    /// Milliseconds until the next tick is due
    pub fn until_next(&self, interval: &TickInterval) -> f64 {
        (f64::from(interval.ms()) - self.accumulator_ms).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_clamps_low() {
        let mut interval = TickInterval::new(100, 10, 200);
        assert_eq!(interval.adjust(-40), 60);
        assert_eq!(interval.adjust(-40), 20);
        assert_eq!(interval.adjust(-40), 10);
    }

    #[test]
    fn test_adjust_clamps_high() {
        let mut interval = TickInterval::default();
        for _ in 0..5 {
            interval.adjust(SPEED_STEP_MS);
        }
        assert_eq!(interval.ms(), 200);
        assert_eq!(interval.as_duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_new_clamps_and_orders_bounds() {
        let interval = TickInterval::new(500, 200, 10);
        assert_eq!(interval.bounds(), (10, 200));
        assert_eq!(interval.ms(), 200);
    }

    #[test]
    fn test_clock_accumulates() {
        let interval = TickInterval::default();
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(60.0, &interval), 0);
        assert_eq!(clock.advance(60.0, &interval), 1);
        assert!((clock.until_next(&interval) - 80.0).abs() < 1e-9);
        assert_eq!(clock.advance(250.0, &interval), 2);
    }

    #[test]
    fn test_clock_caps_catchup() {
        let interval = TickInterval::new(10, 10, 200);
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(1000.0, &interval), MAX_CATCHUP_TICKS);
        // Backlog was dropped, not carried into the next frame
        assert_eq!(clock.advance(0.0, &interval), 0);
    }

    #[test]
    fn test_clock_follows_interval_changes() {
        let mut interval = TickInterval::default();
        let mut clock = TickClock::new();
        interval.adjust(-80);
        assert_eq!(clock.advance(45.0, &interval), 2);
    }
}
