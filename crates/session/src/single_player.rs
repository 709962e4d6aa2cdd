//! Single-player session: phase controller plus the data it drives.

use std::time::Duration;

use crate::audio::AppContext;
use crate::config::SessionConfig;
use crate::controller::SessionController;
use crate::data::SessionData;
use crate::gfx::{Canvas, Font};
use crate::types::{PhaseKind, SessionEvent};
use crate::widgets::Well;

pub struct SinglePlayer {
    controller: SessionController,
    session: SessionData,
}

impl SinglePlayer {
    pub fn new(config: SessionConfig, well: Box<dyn Well>, font: Box<dyn Font>) -> Self {
        let session = SessionData::new(config, well, font);
        let controller = SessionController::new(&session);
        Self {
            controller,
            session,
        }
    }

    pub fn phase(&self) -> PhaseKind {
        self.controller.phase()
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub fn session(&self) -> &SessionData {
        &self.session
    }

    pub fn layout(&mut self, width: i32, height: i32) {
        self.session.layout(width, height);
    }

    /// Run one frame, then drop popups that finished animating.
    pub fn update(&mut self, dt: Duration, events: &[SessionEvent], app: &mut AppContext<'_>) {
        self.controller.update(dt, events, &mut self.session, app);
        self.session.discard_expired_popups();
    }

    /// Session widgets first, the phase overlay on top.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.session.draw(canvas);
        self.controller.draw(&self.session, canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LoggingAudio;
    use crate::test_support::{pressed, GridFont, RecordingCanvas, ScriptedWell};
    use crate::types::{InputType, Rgba};
    use crate::widgets::WellReport;

    const FRAME: Duration = Duration::from_millis(16);

    fn player(well: ScriptedWell) -> SinglePlayer {
        let cfg = SessionConfig::default().with_fade_in(Duration::ZERO);
        let mut p = SinglePlayer::new(cfg, Box::new(well), Box::new(GridFont::default()));
        p.layout(640, 384);
        p
    }

    fn run(p: &mut SinglePlayer, audio: &mut LoggingAudio, frames: usize) {
        for _ in 0..frames {
            let mut app = AppContext::new(&mut *audio);
            p.update(FRAME, &[], &mut app);
        }
    }

    #[test]
    fn first_frame_of_fade_is_opaque_black_on_top() {
        let p = SinglePlayer::new(
            SessionConfig::default(),
            Box::new(ScriptedWell::default()),
            Box::new(GridFont::default()),
        );
        let mut canvas = RecordingCanvas::new(640, 384);
        p.draw(&mut canvas);
        let (rect, color) = *canvas.rects.last().unwrap();
        assert_eq!(rect, canvas.screen_rect());
        assert_eq!(color, Rgba::BLACK);
    }

    #[test]
    fn line_clear_popup_lives_for_two_seconds() {
        let well = ScriptedWell::default();
        let reports = well.reports.clone();
        let mut p = player(well);
        let mut audio = LoggingAudio::new();

        run(&mut p, &mut audio, 1 + 150);
        assert_eq!(p.phase(), PhaseKind::Gameplay);

        reports
            .borrow_mut()
            .push_back(WellReport::LinesCleared { lines: 4, points: 1200 });
        run(&mut p, &mut audio, 1);
        assert_eq!(p.session().score(), 1200);
        assert_eq!(p.session().popups().len(), 1);

        // 125 frames = 2000ms including the spawn frame.
        run(&mut p, &mut audio, 124);
        assert!(p.session().popups().is_empty());
    }

    #[test]
    fn pause_overlay_is_drawn_over_the_well() {
        let mut p = player(ScriptedWell::default());
        let mut audio = LoggingAudio::new();
        run(&mut p, &mut audio, 1 + 150);

        let mut app = AppContext::new(&mut audio);
        p.update(FRAME, &[pressed(InputType::GamePause)], &mut app);
        assert_eq!(p.phase(), PhaseKind::Pause);

        let mut canvas = RecordingCanvas::new(640, 384);
        p.draw(&mut canvas);
        assert!(canvas.sprites.iter().any(|(text, _, _)| text == "PAUSED"));
    }

    #[test]
    fn popup_waits_unmoved_until_the_screen_is_known() {
        let well = ScriptedWell::default();
        let reports = well.reports.clone();
        let cfg = SessionConfig::default().with_fade_in(Duration::ZERO);
        let mut p = SinglePlayer::new(cfg, Box::new(well), Box::new(GridFont::default()));
        let mut audio = LoggingAudio::new();
        run(&mut p, &mut audio, 1 + 150);

        reports
            .borrow_mut()
            .push_back(WellReport::LinesCleared { lines: 1, points: 40 });
        run(&mut p, &mut audio, 60);

        let popup = &p.session().popups()[0];
        assert!(!popup.is_anchored());
        assert_eq!(popup.offset(), 0.0);
        assert_eq!(popup.opacity(), 255);

        p.layout(640, 384);
        run(&mut p, &mut audio, 1);
        let popup = &p.session().popups()[0];
        assert!(popup.is_anchored());
        assert!(popup.offset() > 0.0);
    }
}
