//! Frame pacing
//!
//! Holds the loop to at most one frame per `min_frame_ms` and turns the real
//! time between frames into a bounded simulation step.

use std::thread;
use std::time::{Duration, Instant};

use crate::config::PacingConfig;

/// Monotonic millisecond tick source
pub trait Clock {
    /// Milliseconds since some fixed origin; never decreases
    fn now_ms(&self) -> u64;
    /// Block for roughly `ms` milliseconds
    fn sleep_ms(&mut self, ms: u64);
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Tracks the previous frame's tick and hands out clamped `dt`s
#[derive(Debug, Clone)]
pub struct FramePacer {
    config: PacingConfig,
    prev_tick: u64,
}

impl FramePacer {
    /// Start pacing from `start_tick` (normally the clock's current reading)
    pub fn new(config: PacingConfig, start_tick: u64) -> Self {
        Self {
            config,
            prev_tick: start_tick,
        }
    }

    /// Tick recorded at the end of the last `wait_next_frame`
    pub fn prev_tick(&self) -> u64 {
        self.prev_tick
    }

    /// Block until the minimum frame interval has passed, then return the
    /// elapsed time in seconds, capped at `max_dt`.
    pub fn wait_next_frame<C: Clock>(&mut self, clock: &mut C) -> f32 {
        loop {
            let elapsed = clock.now_ms().saturating_sub(self.prev_tick);
            if elapsed >= self.config.min_frame_ms {
                break;
            }
            clock.sleep_ms(self.config.min_frame_ms - elapsed);
        }

        let now = clock.now_ms();
        let dt = (now.saturating_sub(self.prev_tick) as f32 / 1000.0).min(self.config.max_dt);
        self.prev_tick = now;
        dt
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Clock that only moves when told to, or when slept on
    #[derive(Debug, Default)]
    pub(crate) struct ManualClock {
        pub now: u64,
        pub slept: u64,
    }

    impl ManualClock {
        pub fn at(now: u64) -> Self {
            Self { now, slept: 0 }
        }

        pub fn advance(&mut self, ms: u64) {
            self.now += ms;
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            self.now
        }

        fn sleep_ms(&mut self, ms: u64) {
            self.slept += ms;
            self.now += ms;
        }
    }

    #[test]
    fn test_waits_out_minimum_interval() {
        let mut clock = ManualClock::at(1000);
        let mut pacer = FramePacer::new(PacingConfig::default(), 1000);

        clock.advance(5);
        let dt = pacer.wait_next_frame(&mut clock);
        assert_eq!(clock.slept, 11);
        assert!((dt - 0.016).abs() < 1e-6);
        assert_eq!(pacer.prev_tick(), 1016);
    }

    #[test]
    fn test_no_wait_when_frame_is_late() {
        let mut clock = ManualClock::at(0);
        let mut pacer = FramePacer::new(PacingConfig::default(), 0);

        clock.advance(30);
        let dt = pacer.wait_next_frame(&mut clock);
        assert_eq!(clock.slept, 0);
        assert!((dt - 0.030).abs() < 1e-6);
    }

    #[test]
    fn test_dt_clamped_after_stall() {
        let mut clock = ManualClock::at(0);
        let mut pacer = FramePacer::new(PacingConfig::default(), 0);

        clock.advance(2_000);
        assert_eq!(pacer.wait_next_frame(&mut clock), 0.05);
        // The stall is not carried into the next frame
        clock.advance(20);
        assert!((pacer.wait_next_frame(&mut clock) - 0.020).abs() < 1e-6);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let a = clock.now_ms();
        clock.sleep_ms(2);
        assert!(clock.now_ms() >= a + 2);
    }

    proptest! {
        #[test]
        fn prop_dt_within_bounds(gaps in prop::collection::vec(0u64..500, 1..100)) {
            let config = PacingConfig::default();
            let mut clock = ManualClock::at(0);
            let mut pacer = FramePacer::new(config, 0);
            for gap in gaps {
                clock.advance(gap);
                let dt = pacer.wait_next_frame(&mut clock);
                prop_assert!(dt > 0.0 && dt <= config.max_dt);
            }
        }
    }
}
