//! Per-frame event collection.

use std::time::{Duration, Instant};

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event};
use tracing::warn;

use crate::map::{map_event, should_quit};
use crate::types::SessionEvent;

/// Events kept per frame; anything past this is dropped and counted.
pub const FRAME_EVENT_CAPACITY: usize = 32;

/// One frame's session events in arrival order.
#[derive(Debug, Default)]
pub struct FrameInput {
    events: ArrayVec<SessionEvent, FRAME_EVENT_CAPACITY>,
    quit: bool,
    dropped: usize,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Events lost to overflow since the last `clear`.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.quit = false;
        self.dropped = 0;
    }

    /// Record one terminal event.
    pub fn push_terminal(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            if should_quit(*key) {
                self.quit = true;
                return;
            }
        }
        if let Some(ev) = map_event(event) {
            self.push(ev);
        }
    }

    pub fn push(&mut self, event: SessionEvent) {
        if self.events.try_push(event).is_err() {
            self.dropped += 1;
        }
    }
}

/// Collect the next frame's events into `input` (cleared first).
///
/// Blocks for at most `timeout` waiting for the first event, then drains
/// whatever else is already queued without blocking.
pub fn poll_frame(input: &mut FrameInput, timeout: Duration) -> Result<()> {
    input.clear();
    let deadline = Instant::now() + timeout;

    let mut wait = timeout;
    while event::poll(wait)? {
        input.push_terminal(&event::read()?);
        if input.quit_requested() {
            break;
        }
        wait = Duration::ZERO;
    }

    if input.dropped() > 0 {
        warn!(dropped = input.dropped(), "frame input overflow");
    }

    let now = Instant::now();
    if now < deadline {
        std::thread::sleep(deadline - now);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InputEvent, InputType, WindowEvent};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn keeps_arrival_order() {
        let mut input = FrameInput::new();
        input.push_terminal(&Event::Key(KeyEvent::from(KeyCode::Left)));
        input.push_terminal(&Event::FocusLost);
        input.push_terminal(&Event::Key(KeyEvent::from(KeyCode::Char('p'))));

        assert_eq!(
            input.events(),
            &[
                SessionEvent::Input(InputEvent::pressed(InputType::MoveLeft)),
                SessionEvent::Window(WindowEvent::FocusLost),
                SessionEvent::Input(InputEvent::pressed(InputType::GamePause)),
            ]
        );
    }

    #[test]
    fn overflow_is_dropped_and_counted() {
        let mut input = FrameInput::new();
        for _ in 0..FRAME_EVENT_CAPACITY + 5 {
            input.push(SessionEvent::Window(WindowEvent::FocusGained));
        }
        assert_eq!(input.events().len(), FRAME_EVENT_CAPACITY);
        assert_eq!(input.dropped(), 5);

        input.clear();
        assert!(input.events().is_empty());
        assert_eq!(input.dropped(), 0);
    }

    #[test]
    fn quit_keys_set_the_flag_only() {
        let mut input = FrameInput::new();
        input.push_terminal(&Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(input.quit_requested());
        assert!(input.events().is_empty());
    }
}
