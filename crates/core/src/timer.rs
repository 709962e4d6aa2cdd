//! Interval timer with per-advance ticks and a completion edge.

use std::time::Duration;

/// Result of advancing a timer that has not finished yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Progress toward the period in `[0, 1]`, after this advance.
    pub progress: f64,
    /// The period was reached during this advance.
    pub completed: bool,
}

/// Accumulates time and reports completion once the period has elapsed.
///
/// Instead of storing callbacks, [`IntervalTimer::advance`] returns what
/// happened and the owner reacts with its own context in hand:
///
/// - every `Some(tick)` is a per-tick notification;
/// - `tick.completed` is the completion notification, reported at most once
///   per call no matter how many periods `dt` spans.
///
/// After completing, the timer is finished and `advance` returns `None` until
/// the owner calls [`IntervalTimer::restart`]. Restarting resets elapsed time
/// to exactly zero; any overshoot past the period is discarded.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tui_stacker_core::IntervalTimer;
///
/// let mut beat = IntervalTimer::new(Duration::from_millis(800));
/// let tick = beat.advance(Duration::from_millis(500)).unwrap();
/// assert!(!tick.completed);
///
/// let tick = beat.advance(Duration::from_millis(300)).unwrap();
/// assert!(tick.completed);
/// assert!(beat.advance(Duration::from_millis(16)).is_none());
///
/// beat.restart();
/// assert_eq!(beat.elapsed(), Duration::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    period: Duration,
    elapsed: Duration,
    fired_count: u32,
    finished: bool,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
            fired_count: 0,
            finished: false,
        }
    }

    pub fn advance(&mut self, dt: Duration) -> Option<Tick> {
        if self.finished {
            return None;
        }

        self.elapsed = self.elapsed.saturating_add(dt).min(self.period);
        let completed = self.elapsed >= self.period;
        if completed {
            self.finished = true;
            self.fired_count += 1;
        }

        Some(Tick {
            progress: self.progress(),
            completed,
        })
    }

    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.finished = false;
    }

    pub fn progress(&self) -> f64 {
        if self.period.is_zero() {
            return if self.finished { 1.0 } else { 0.0 };
        }
        (self.elapsed.as_secs_f64() / self.period.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Completions since construction.
    pub fn fired_count(&self) -> u32 {
        self.fired_count
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn short_of_period_never_completes() {
        let mut t = IntervalTimer::new(ms(800));
        for _ in 0..49 {
            let tick = t.advance(ms(16)).unwrap();
            assert!(!tick.completed);
        }
        assert_eq!(t.fired_count(), 0);
    }

    #[test]
    fn exact_period_completes_once() {
        let mut t = IntervalTimer::new(ms(800));
        let mut completions = 0;
        for _ in 0..50 {
            if let Some(tick) = t.advance(ms(16)) {
                if tick.completed {
                    completions += 1;
                }
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(t.fired_count(), 1);
    }

    #[test]
    fn huge_delta_completes_only_once_per_call() {
        let mut t = IntervalTimer::new(ms(100));
        let tick = t.advance(ms(1000)).unwrap();
        assert!(tick.completed);
        assert_eq!(tick.progress, 1.0);
        assert_eq!(t.fired_count(), 1);
        assert!(t.advance(ms(1000)).is_none());
    }

    #[test]
    fn restart_discards_overshoot() {
        let mut t = IntervalTimer::new(ms(100));
        t.advance(ms(150));
        t.restart();
        assert_eq!(t.elapsed(), Duration::ZERO);

        // A full period is needed again; the 50ms overshoot was not carried.
        let tick = t.advance(ms(60)).unwrap();
        assert!(!tick.completed);
    }

    #[test]
    fn zero_period_completes_on_first_advance() {
        let mut t = IntervalTimer::new(Duration::ZERO);
        assert_eq!(t.progress(), 0.0);
        let tick = t.advance(Duration::ZERO).unwrap();
        assert!(tick.completed);
        assert_eq!(tick.progress, 1.0);
    }
}
