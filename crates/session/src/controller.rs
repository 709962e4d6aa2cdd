//! Owner of the single active phase.

use std::time::Duration;

use tracing::debug;

use crate::audio::AppContext;
use crate::data::SessionData;
use crate::gfx::Canvas;
use crate::phase::{FadeIn, Phase, Transition};
use crate::types::{PhaseKind, SessionEvent};

/// Runs the active phase and performs the transitions it asks for.
///
/// A transition takes effect within the same `update` call: the next phase
/// is built, moved into the slot (dropping the old phase together with every
/// animator and timer it owned), and only then entered. At most one
/// transition happens per call.
pub struct SessionController {
    phase: Phase,
    transitions: u32,
}

impl SessionController {
    /// Start a session with the opening fade.
    pub fn new(session: &SessionData) -> Self {
        Self {
            phase: Phase::FadeIn(FadeIn::new(session.config())),
            transitions: 0,
        }
    }

    pub fn phase(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn active(&self) -> &Phase {
        &self.phase
    }

    pub fn transition_count(&self) -> u32 {
        self.transitions
    }

    pub fn update(
        &mut self,
        dt: Duration,
        events: &[SessionEvent],
        session: &mut SessionData,
        app: &mut AppContext<'_>,
    ) {
        if let Some(next) = self.phase.update(dt, events, session, app) {
            self.transition(next, session, app);
        }
    }

    pub fn draw(&self, session: &SessionData, canvas: &mut dyn Canvas) {
        self.phase.draw(session, canvas);
    }

    fn transition(&mut self, next: Transition, session: &SessionData, app: &mut AppContext<'_>) {
        let from = self.phase.kind();
        self.phase = Phase::build(next, session);
        self.phase.enter(session, app);
        self.transitions += 1;
        debug!(
            from = from.as_str(),
            to = self.phase.kind().as_str(),
            "phase transition"
        );
    }
}
