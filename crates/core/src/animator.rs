//! Time-to-value tween.

use std::time::Duration;

/// Value function mapping normalized progress `t ∈ [0, 1]` to an output.
pub type ValueFn<T> = fn(f64) -> T;

/// Maps elapsed time over a fixed duration onto a value.
///
/// The produced value depends on the elapsed time only. `elapsed` never
/// exceeds `duration`, so a finished animator keeps returning `f(1)`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tui_stacker_core::Animator;
///
/// let mut fade = Animator::new(Duration::from_millis(500), |t| (1.0 - t) * 255.0);
/// assert_eq!(fade.value(), 255.0);
///
/// fade.advance(Duration::from_millis(250));
/// assert!(fade.running());
///
/// fade.advance(Duration::from_millis(400));
/// assert!(!fade.running());
/// assert_eq!(fade.value(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Animator<T> {
    duration: Duration,
    elapsed: Duration,
    f: ValueFn<T>,
}

impl<T> Animator<T> {
    pub fn new(duration: Duration, f: ValueFn<T>) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            f,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// Normalized progress in `[0, 1]`. A zero-length animator is always at 1.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> T {
        (self.f)(self.progress())
    }

    pub fn running(&self) -> bool {
        self.elapsed < self.duration
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
