//! The four session phases.
//!
//! A phase is built as a plain value with no side effects. Its entry action
//! runs separately, through [`Phase::enter`], once the controller has dropped
//! the phase it replaces.

use std::time::Duration;

use tracing::{info, trace};
use tui_stacker_core::{Animator, IntervalTimer};

use crate::audio::AppContext;
use crate::config::SessionConfig;
use crate::data::SessionData;
use crate::gfx::{Canvas, Sprite};
use crate::types::{
    Cue, InputType, PhaseKind, Rect, Rgba, SessionEvent, WindowEvent, COUNTDOWN_BEATS,
};
use crate::widgets::WellReport;

const COUNTDOWN_COLOR: Rgba = Rgba::from_u32(0xFFFF_FFFF);
const COUNTDOWN_BAR_COLOR: Rgba = Rgba::from_u32(0x5078_DCFF);
const PAUSE_DIM: Rgba = Rgba::new(0, 0, 0, 160);
const PAUSE_COLOR: Rgba = Rgba::from_u32(0xFFFF_FFFF);

/// Phase change requested by the active phase.
///
/// The opening fade is only ever the initial phase, so it is not a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Countdown,
    Gameplay,
    Pause,
}

/// The active phase of a session.
pub enum Phase {
    FadeIn(FadeIn),
    Countdown(Countdown),
    Gameplay(Gameplay),
    Pause(Pause),
}

impl Phase {
    pub(crate) fn build(next: Transition, session: &SessionData) -> Self {
        match next {
            Transition::Countdown => Phase::Countdown(Countdown::new(session)),
            Transition::Gameplay => Phase::Gameplay(Gameplay),
            Transition::Pause => Phase::Pause(Pause::new(session)),
        }
    }

    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::FadeIn(_) => PhaseKind::FadeIn,
            Phase::Countdown(_) => PhaseKind::Countdown,
            Phase::Gameplay(_) => PhaseKind::Gameplay,
            Phase::Pause(_) => PhaseKind::Pause,
        }
    }

    pub(crate) fn enter(&mut self, session: &SessionData, app: &mut AppContext<'_>) {
        match self {
            Phase::Countdown(p) => p.enter(session, app),
            Phase::Pause(p) => p.enter(app),
            Phase::FadeIn(_) | Phase::Gameplay(_) => {}
        }
    }

    pub(crate) fn update(
        &mut self,
        dt: Duration,
        events: &[SessionEvent],
        session: &mut SessionData,
        app: &mut AppContext<'_>,
    ) -> Option<Transition> {
        match self {
            Phase::FadeIn(p) => p.update(dt),
            Phase::Countdown(p) => p.update(dt, events, session, app),
            Phase::Gameplay(p) => p.update(dt, events, session, app),
            Phase::Pause(p) => p.update(dt, events, session),
        }
    }

    pub(crate) fn draw(&self, session: &SessionData, canvas: &mut dyn Canvas) {
        match self {
            Phase::FadeIn(p) => p.draw(canvas),
            Phase::Countdown(p) => p.draw(session, canvas),
            Phase::Gameplay(_) => {}
            Phase::Pause(p) => p.draw(session, canvas),
        }
    }
}

/// Fade from black over whatever the session draws underneath.
#[derive(Debug, Clone)]
pub struct FadeIn {
    alpha: Animator<u8>,
}

impl FadeIn {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            alpha: Animator::new(config.fade_in, |t| ((1.0 - t) * 255.0) as u8),
        }
    }

    pub fn alpha(&self) -> u8 {
        self.alpha.value()
    }

    fn update(&mut self, dt: Duration) -> Option<Transition> {
        self.alpha.advance(dt);
        if self.alpha.running() {
            None
        } else {
            Some(Transition::Countdown)
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let screen = canvas.screen_rect();
        canvas.fill_rect(screen, Rgba::BLACK.with_alpha(self.alpha()));
    }
}

/// Three timed beats with an audio cue each, then back to gameplay.
#[derive(Debug, Clone)]
pub struct Countdown {
    beat: usize,
    timer: IntervalTimer,
    beat_progress: f64,
    digits: [Sprite; COUNTDOWN_BEATS],
}

impl Countdown {
    pub fn new(session: &SessionData) -> Self {
        let font = session.font();
        Self {
            beat: 0,
            timer: IntervalTimer::new(session.config().countdown_beat),
            beat_progress: 0.0,
            digits: std::array::from_fn(|i| {
                font.render_text(&(COUNTDOWN_BEATS - i).to_string(), COUNTDOWN_COLOR)
            }),
        }
    }

    pub fn beat(&self) -> usize {
        self.beat
    }

    fn enter(&mut self, session: &SessionData, app: &mut AppContext<'_>) {
        app.audio().play_once(session.countdown_cue(0));
    }

    fn update(
        &mut self,
        dt: Duration,
        events: &[SessionEvent],
        session: &mut SessionData,
        app: &mut AppContext<'_>,
    ) -> Option<Transition> {
        // Board-only visuals stay live during the countdown.
        session.update_well_outside_play(dt, events, PhaseKind::Countdown);

        if let Some(tick) = self.timer.advance(dt) {
            self.beat_progress = tick.progress;
            if tick.completed {
                self.timer.restart();
                self.beat += 1;
                trace!(beat = self.beat, "countdown beat");
                if self.beat < COUNTDOWN_BEATS {
                    app.audio().play_once(session.countdown_cue(self.beat));
                }
            }
        }

        if self.beat >= COUNTDOWN_BEATS {
            app.audio().resume_all();
            return Some(Transition::Gameplay);
        }
        None
    }

    fn draw(&self, session: &SessionData, canvas: &mut dyn Canvas) {
        let Some(digit) = self.digits.get(self.beat) else {
            return;
        };
        let well = session.well_rect();
        let x = well.center_x() - digit.width() as i32 / 2;
        let y = well.center_y() - digit.height() as i32 / 2;
        canvas.draw_sprite(digit, x, y);

        let bar_w = (well.w as f64 * (1.0 - self.beat_progress)) as i32;
        if bar_w > 0 {
            let bar_y = y + digit.height() as i32 + 16;
            canvas.fill_rect(
                Rect::new(well.center_x() - bar_w / 2, bar_y, bar_w, 4),
                COUNTDOWN_BAR_COLOR,
            );
        }
    }
}

/// Active play.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gameplay;

impl Gameplay {
    fn update(
        &mut self,
        dt: Duration,
        events: &[SessionEvent],
        session: &mut SessionData,
        app: &mut AppContext<'_>,
    ) -> Option<Transition> {
        // Focus loss and the pause press are separate cases. Whichever comes
        // first ends the frame, so one frame never pauses twice.
        for event in events {
            match event {
                SessionEvent::Window(WindowEvent::FocusLost) => return Some(Transition::Pause),
                SessionEvent::Input(input)
                    if input.kind() == InputType::GamePause && input.down() =>
                {
                    return Some(Transition::Pause)
                }
                _ => {}
            }
        }

        match session.update_well(dt, events, PhaseKind::Gameplay) {
            WellReport::Idle => {}
            WellReport::LinesCleared { lines, points } => {
                app.audio().play_once(Cue::LineClear);
                session.record_line_clear(lines, points);
            }
            WellReport::ToppedOut => session.set_game_over(),
        }

        session.refresh_texts();
        session.advance_popups(dt);
        session.advance_gametime(dt);
        None
    }
}

/// Frozen board with all audio paused.
#[derive(Debug, Clone)]
pub struct Pause {
    label: Sprite,
}

impl Pause {
    pub fn new(session: &SessionData) -> Self {
        Self {
            label: session.font().render_text("PAUSED", PAUSE_COLOR),
        }
    }

    fn enter(&mut self, app: &mut AppContext<'_>) {
        info!("session paused");
        app.audio().pause_all();
    }

    fn update(
        &mut self,
        dt: Duration,
        events: &[SessionEvent],
        session: &mut SessionData,
    ) -> Option<Transition> {
        if events.iter().any(SessionEvent::is_pause_press) {
            return Some(Transition::Countdown);
        }
        session.update_well_outside_play(dt, events, PhaseKind::Pause);
        None
    }

    fn draw(&self, session: &SessionData, canvas: &mut dyn Canvas) {
        let well = session.well_rect();
        canvas.fill_rect(well, PAUSE_DIM);
        let x = well.center_x() - self.label.width() as i32 / 2;
        let y = well.center_y() - self.label.height() as i32 / 2;
        canvas.draw_sprite(&self.label, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LoggingAudio;
    use crate::test_support::{pressed, session_with, ScriptedWell};

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn countdown_plays_three_cues_then_resumes_once() {
        let well = ScriptedWell::default();
        let phases = well.phases.clone();
        let mut session = session_with(well, SessionConfig::default());
        let mut audio = LoggingAudio::new();
        let mut countdown = Countdown::new(&session);

        let mut app = AppContext::new(&mut audio);
        countdown.enter(&session, &mut app);

        let mut frames = 0;
        let next = loop {
            frames += 1;
            if let Some(next) = countdown.update(FRAME, &[], &mut session, &mut app) {
                break next;
            }
            assert!(frames < 1000);
        };
        drop(app);

        // 3 x 800ms at 16ms frames.
        assert_eq!(frames, 150);
        assert_eq!(next, Transition::Gameplay);
        assert_eq!(
            audio.recent(),
            &[Cue::CountdownThree, Cue::CountdownTwo, Cue::CountdownOne]
        );
        assert_eq!(audio.resume_calls(), 1);
        assert!(phases.borrow().iter().all(|p| *p == PhaseKind::Countdown));
    }

    #[test]
    fn countdown_beat_advances_on_timer_completion() {
        let mut session = session_with(ScriptedWell::default(), SessionConfig::default());
        let mut audio = LoggingAudio::new();
        let mut app = AppContext::new(&mut audio);
        let mut countdown = Countdown::new(&session);

        for _ in 0..49 {
            countdown.update(FRAME, &[], &mut session, &mut app);
        }
        assert_eq!(countdown.beat(), 0);
        countdown.update(FRAME, &[], &mut session, &mut app);
        assert_eq!(countdown.beat(), 1);
    }

    #[test]
    fn countdown_ignores_pause_input() {
        let mut session = session_with(ScriptedWell::default(), SessionConfig::default());
        let mut audio = LoggingAudio::new();
        let mut app = AppContext::new(&mut audio);
        let mut countdown = Countdown::new(&session);

        let next = countdown.update(
            FRAME,
            &[pressed(InputType::GamePause)],
            &mut session,
            &mut app,
        );
        assert_eq!(next, None);
    }

    #[test]
    fn focus_loss_and_pause_press_in_one_frame_pause_once() {
        let mut session = session_with(ScriptedWell::default(), SessionConfig::default());
        let mut audio = LoggingAudio::new();
        let mut app = AppContext::new(&mut audio);
        let events = [
            SessionEvent::Window(WindowEvent::FocusLost),
            pressed(InputType::GamePause),
        ];
        assert_eq!(
            Gameplay.update(FRAME, &events, &mut session, &mut app),
            Some(Transition::Pause)
        );
    }

    #[test]
    fn gameplay_books_line_clears_and_top_out() {
        let well = ScriptedWell::default();
        let reports = well.reports.clone();
        let mut session = session_with(well, SessionConfig::default());
        let mut audio = LoggingAudio::new();

        reports
            .borrow_mut()
            .push_back(WellReport::LinesCleared { lines: 2, points: 100 });
        reports.borrow_mut().push_back(WellReport::ToppedOut);
        {
            let mut app = AppContext::new(&mut audio);
            Gameplay.update(FRAME, &[], &mut session, &mut app);
            assert_eq!(session.score(), 100);
            assert!(!session.texts_need_update());
            Gameplay.update(FRAME, &[], &mut session, &mut app);
        }
        assert!(session.is_game_over());
        assert_eq!(audio.recent(), &[Cue::LineClear]);
    }

    #[test]
    fn pause_freezes_the_game_clock() {
        let mut session = session_with(ScriptedWell::default(), SessionConfig::default());
        let mut pause = Pause::new(&session);
        for _ in 0..100 {
            assert_eq!(pause.update(FRAME, &[], &mut session), None);
        }
        assert_eq!(session.right_panel().gametime(), Duration::ZERO);
        assert_eq!(
            pause.update(FRAME, &[pressed(InputType::GamePause)], &mut session),
            Some(Transition::Countdown)
        );
    }

    #[test]
    fn fade_alpha_runs_from_opaque_to_clear() {
        let mut fade = FadeIn::new(&SessionConfig::default());
        assert_eq!(fade.alpha(), 255);
        assert_eq!(fade.update(Duration::from_millis(250)), None);
        assert_eq!(fade.alpha(), 127);
        assert_eq!(fade.update(Duration::from_millis(250)), Some(Transition::Countdown));
        assert_eq!(fade.alpha(), 0);
    }

    #[test]
    fn pause_forwards_frame_events_to_the_well() {
        let well = ScriptedWell::default();
        let (phases, seen) = (well.phases.clone(), well.events.clone());
        let mut session = session_with(well, SessionConfig::default());
        let mut pause = Pause::new(&session);

        let frame = [pressed(InputType::MoveLeft), pressed(InputType::Hold)];
        assert_eq!(pause.update(FRAME, &frame, &mut session), None);
        assert_eq!(*phases.borrow(), vec![PhaseKind::Pause]);
        assert_eq!(*seen.borrow(), frame.to_vec());

        // The unpause frame leaves without touching the board.
        let unpause = [pressed(InputType::MoveRight), pressed(InputType::GamePause)];
        assert_eq!(
            pause.update(FRAME, &unpause, &mut session),
            Some(Transition::Countdown)
        );
        assert_eq!(phases.borrow().len(), 1);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn top_out_during_pause_is_not_lost() {
        let well = ScriptedWell::default();
        well.reports.borrow_mut().push_back(WellReport::ToppedOut);
        let mut session = session_with(well, SessionConfig::default());
        let mut pause = Pause::new(&session);

        assert_eq!(pause.update(FRAME, &[], &mut session), None);
        assert!(session.is_game_over());
    }
}
