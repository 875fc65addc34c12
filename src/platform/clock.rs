//! Session time and tick pacing

use std::time::{Duration, Instant};

/// Session time source
pub trait Clock {
    /// Time since the session started
    fn elapsed(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `Instant` and `thread::sleep`
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Clock that only advances when slept on (replays and tests)
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate work taking `duration`
    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
    }
}

/// Computes the gap after each tick.
///
/// The wait is `max(period - elapsed, period)` in whole milliseconds, so the
/// loop always sleeps at least one full period and never catches up after a
/// slow tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    period_ms: u64,
}

impl Pacer {
    pub fn new(period: Duration) -> Self {
        Self {
            period_ms: period.as_millis() as u64,
        }
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }

    pub fn wait_after(&self, tick_ms: u64) -> Duration {
        let wait = self.period_ms.saturating_sub(tick_ms).max(self.period_ms);
        Duration::from_millis(wait)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacer_sleep_floor() {
        let pacer = Pacer::new(Duration::from_millis(40));
        assert_eq!(pacer.wait_after(0), Duration::from_millis(40));
        assert_eq!(pacer.wait_after(15), Duration::from_millis(40));
        // Overruns are not compensated
        assert_eq!(pacer.wait_after(120), Duration::from_millis(40));
    }

    #[test]
    fn test_manual_clock() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.elapsed(), Duration::ZERO);
        clock.advance(Duration::from_millis(5));
        clock.sleep(Duration::from_millis(40));
        assert_eq!(clock.elapsed(), Duration::from_millis(45));
    }
}
