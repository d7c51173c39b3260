//! Frame pacing: measure the iteration, sleep the remainder.
//!
//! No accumulator and no catch-up frames. An iteration that overruns the
//! target interval is reported as `Pace::Behind` and the loop moves on.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::GameError;

/// Source of monotonic time readings and of blocking sleeps.
pub trait TimeSource {
    /// Read the current instant.
    fn now(&self) -> Result<Instant, GameError>;

    /// Block the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Result<Instant, GameError> {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// The operating system's monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicTime;

impl TimeSource for MonotonicTime {
    fn now(&self) -> Result<Instant, GameError> {
        Ok(Instant::now())
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration)
    }
}

/// Outcome of pacing one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// The iteration finished early; slept for the remainder.
    Slept(Duration),
    /// The iteration used the whole interval or more; returned at once.
    Behind(Duration),
}

impl Pace {
    pub fn is_behind(&self) -> bool {
        matches!(self, Pace::Behind(_))
    }
}

/// Frame clock bound to a fixed target interval.
#[derive(Debug)]
pub struct Clock<T> {
    source: T,
    target_interval: Duration,
}

impl<T: TimeSource> Clock<T> {
    pub fn new(source: T, target_interval: Duration) -> Self {
        Self { source, target_interval }
    }

    pub fn target_interval(&self) -> Duration {
        self.target_interval
    }

    pub fn now(&self) -> Result<Instant, GameError> {
        self.source.now()
    }

    /// Time elapsed since `reference`. Never negative.
    pub fn elapsed_since(&self, reference: Instant) -> Result<Duration, GameError> {
        Ok(self.now()?.saturating_duration_since(reference))
    }

    /// Hold the caller until `target_interval` has passed since `iteration_start`.
    pub fn pace(&self, iteration_start: Instant) -> Result<Pace, GameError> {
        let elapsed = self.elapsed_since(iteration_start)?;
        if elapsed < self.target_interval {
            let remainder = self.target_interval - elapsed;
            self.source.sleep(remainder);
            Ok(Pace::Slept(remainder))
        } else {
            Ok(Pace::Behind(elapsed - self.target_interval))
        }
    }
}

// ============================================================================
// MANUAL TIME (tests)
// ============================================================================

#[cfg(test)]
pub(crate) use manual::ManualTime;


// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(50);

    #[test]
    fn pace_sleeps_the_remainder() {
        let time = ManualTime::new(Duration::ZERO);
        let clock = Clock::new(&time, INTERVAL);

        let start = clock.now().unwrap();
        time.advance(Duration::from_millis(12));

        assert_eq!(clock.pace(start).unwrap(), Pace::Slept(Duration::from_millis(38)));
        assert_eq!(time.total_slept(), Duration::from_millis(38));
        assert_eq!(clock.elapsed_since(start).unwrap(), INTERVAL);
    }

    #[test]
    fn pace_returns_immediately_when_behind() {
        let time = ManualTime::new(Duration::ZERO);
        let clock = Clock::new(&time, INTERVAL);

        let start = clock.now().unwrap();
        time.advance(Duration::from_millis(70));

        assert_eq!(clock.pace(start).unwrap(), Pace::Behind(Duration::from_millis(20)));
        assert_eq!(time.total_slept(), Duration::ZERO);
    }

    #[test]
    fn pace_at_exact_interval_does_not_sleep() {
        let time = ManualTime::new(Duration::ZERO);
        let clock = Clock::new(&time, INTERVAL);

        let start = clock.now().unwrap();
        time.advance(INTERVAL);

        assert_eq!(clock.pace(start).unwrap(), Pace::Behind(Duration::ZERO));
        assert_eq!(time.total_slept(), Duration::ZERO);
    }

    #[test]
    fn elapsed_since_future_reference_is_zero() {
        let time = ManualTime::new(Duration::ZERO);
        let clock = Clock::new(&time, INTERVAL);

        let reference = clock.now().unwrap() + Duration::from_secs(1);
        assert_eq!(clock.elapsed_since(reference).unwrap(), Duration::ZERO);
    }

    #[test]
    fn clock_failure_propagates_from_pace() {
        let time = ManualTime::failing_after(Duration::ZERO, 1);
        let clock = Clock::new(&time, INTERVAL);

        let start = clock.now().unwrap();
        assert!(matches!(clock.pace(start), Err(GameError::ClockUnavailable(_))));
    }

    #[test]
    fn monotonic_pace_never_returns_early() {
        let interval = Duration::from_millis(20);
        let clock = Clock::new(MonotonicTime, interval);

        let start = clock.now().unwrap();
        clock.pace(start).unwrap();
        assert!(start.elapsed() >= interval);
    }

    #[test]
    fn monotonic_pace_after_overrun_is_behind() {
        let interval = Duration::from_millis(5);
        let clock = Clock::new(MonotonicTime, interval);

        let start = clock.now().unwrap();
        thread::sleep(Duration::from_millis(15));
        assert!(clock.pace(start).unwrap().is_behind());
    }
}
