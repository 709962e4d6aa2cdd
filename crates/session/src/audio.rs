//! Audio collaborator interface and the per-frame application context.

use tracing::debug;

use crate::types::Cue;

/// What the session needs from an audio mixer.
pub trait Audio {
    fn play_once(&mut self, cue: Cue);
    fn pause_all(&mut self);
    fn resume_all(&mut self);
}

/// Application services handed to the session for the duration of one update.
pub struct AppContext<'a> {
    audio: &'a mut dyn Audio,
}

impl<'a> AppContext<'a> {
    pub fn new(audio: &'a mut dyn Audio) -> Self {
        Self { audio }
    }

    pub fn audio(&mut self) -> &mut (dyn Audio + 'a) {
        &mut *self.audio
    }
}

/// Cues kept by [`LoggingAudio`]; older ones are dropped.
pub const CUE_HISTORY: usize = 16;

/// Audio backend without an output device.
///
/// Tracks the mixer state it would drive and reports every call through
/// `tracing`, which makes it usable both headless and in tests. Memory stays
/// bounded: per-cue counters plus the last [`CUE_HISTORY`] cues.
#[derive(Debug, Clone)]
pub struct LoggingAudio {
    recent: Vec<Cue>,
    counts: [u32; Cue::COUNT],
    pause_calls: u32,
    resume_calls: u32,
    paused: bool,
}

impl Default for LoggingAudio {
    fn default() -> Self {
        Self {
            recent: Vec::with_capacity(CUE_HISTORY),
            counts: [0; Cue::COUNT],
            pause_calls: 0,
            resume_calls: 0,
            paused: false,
        }
    }
}

impl LoggingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent cues, oldest first.
    pub fn recent(&self) -> &[Cue] {
        &self.recent
    }

    pub fn last_cue(&self) -> Option<Cue> {
        self.recent.last().copied()
    }

    /// Times `cue` has been played since construction.
    pub fn play_count(&self, cue: Cue) -> u32 {
        self.counts[cue as usize]
    }

    pub fn pause_calls(&self) -> u32 {
        self.pause_calls
    }

    pub fn resume_calls(&self) -> u32 {
        self.resume_calls
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Audio for LoggingAudio {
    fn play_once(&mut self, cue: Cue) {
        debug!(?cue, "audio: play once");
        self.counts[cue as usize] = self.counts[cue as usize].saturating_add(1);
        if self.recent.len() == CUE_HISTORY {
            self.recent.remove(0);
        }
        self.recent.push(cue);
    }

    fn pause_all(&mut self) {
        debug!(was_paused = self.paused, "audio: pause all");
        self.pause_calls += 1;
        self.paused = true;
    }

    fn resume_all(&mut self) {
        debug!(was_paused = self.paused, "audio: resume all");
        self.resume_calls += 1;
        self.paused = false;
    }
}
