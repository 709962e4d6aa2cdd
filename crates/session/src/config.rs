//! Runtime-tunable session settings.

use std::time::Duration;

use crate::types::{COUNTDOWN_BEAT_MS, DEFAULT_GOAL_LINES, FADE_IN_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Length of the opening fade. Zero skips straight to the countdown.
    pub fade_in: Duration,
    /// Interval between countdown cues.
    pub countdown_beat: Duration,
    /// Lines to clear per level.
    pub goal_lines: u32,
    pub start_level: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fade_in: Duration::from_millis(FADE_IN_MS as u64),
            countdown_beat: Duration::from_millis(COUNTDOWN_BEAT_MS as u64),
            goal_lines: DEFAULT_GOAL_LINES,
            start_level: 1,
        }
    }
}

impl SessionConfig {
    pub fn with_fade_in(mut self, fade_in: Duration) -> Self {
        self.fade_in = fade_in;
        self
    }

    pub fn with_countdown_beat(mut self, beat: Duration) -> Self {
        self.countdown_beat = beat;
        self
    }

    pub fn with_goal_lines(mut self, lines: u32) -> Self {
        self.goal_lines = lines.max(1);
        self
    }

    pub fn with_start_level(mut self, level: u32) -> Self {
        self.start_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_timing_constants() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.fade_in, Duration::from_millis(500));
        assert_eq!(cfg.countdown_beat, Duration::from_millis(800));
        assert_eq!(cfg.goal_lines, 10);
        assert_eq!(cfg.start_level, 1);
    }

    #[test]
    fn goal_lines_never_zero() {
        assert_eq!(SessionConfig::default().with_goal_lines(0).goal_lines, 1);
    }
}
