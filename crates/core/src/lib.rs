//! Timing core - pure, deterministic, and testable
//!
//! This crate holds the two time-driven primitives the session is built on.
//! Neither reads a clock: every advance takes the elapsed frame time as an
//! explicit argument, so behaviour is identical at any frame rate and tests
//! can drive them with synthetic deltas.
//!
//! # Module Structure
//!
//! - [`animator`]: `Animator`, mapping elapsed time over a fixed duration onto
//!   a value through a pure function
//! - [`timer`]: `IntervalTimer`, reporting per-advance ticks and a completion
//!   edge once its period has elapsed
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tui_stacker_core::{Animator, IntervalTimer};
//!
//! let frame = Duration::from_millis(16);
//! let mut rise = Animator::new(Duration::from_secs(2), |t| t * 100.0);
//! let mut beat = IntervalTimer::new(Duration::from_millis(800));
//!
//! for _ in 0..50 {
//!     rise.advance(frame);
//!     beat.advance(frame);
//! }
//!
//! assert!((rise.value() - 40.0).abs() < 1e-9);
//! assert_eq!(beat.fired_count(), 1);
//! ```

pub mod animator;
pub mod timer;

pub use tui_stacker_types as types;

pub use animator::{Animator, ValueFn};
pub use timer::{IntervalTimer, Tick};
