use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

use crate::domain::ports::Clock;

/// Monotonic wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Deterministic clock that moves forward by a fixed step on every reading.
///
/// A single request reads the clock twice, so its elapsed time is exactly
/// one step. Intended for tests.
#[derive(Debug)]
pub struct SteppingClock {
    origin: Instant,
    step: Duration,
    ticks: AtomicU32,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            origin: Instant::now(),
            step,
            ticks: AtomicU32::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Instant {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.origin + self.step * tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;
        let start = clock.now();
        let end = clock.now();
        assert!(end >= start);
    }

    #[test]
    fn test_stepping_clock_advances_by_step() {
        let clock = SteppingClock::new(Duration::from_millis(5));
        let start = clock.now();
        let end = clock.now();
        assert_eq!(end - start, Duration::from_millis(5));
    }
}
