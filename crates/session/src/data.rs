//! Session-level state the phases read and mutate.

use std::time::Duration;

use tracing::debug;

use crate::config::SessionConfig;
use crate::gfx::{Canvas, Font};
use crate::popup::TextPopup;
use crate::types::{
    Cue, PhaseKind, Rect, SessionEvent, BOARD_CELL_PX, BOARD_HEIGHT, BOARD_WIDTH,
    COUNTDOWN_BEATS, COUNTDOWN_CUES,
};
use crate::widgets::{LeftPanel, RightPanel, Well, WellReport};

/// Well size in logical pixels.
pub const WELL_W: i32 = BOARD_WIDTH as i32 * BOARD_CELL_PX;
pub const WELL_H: i32 = BOARD_HEIGHT as i32 * BOARD_CELL_PX;

/// Side panel width and the gap between panels and the well.
pub const PANEL_W: i32 = 112;
pub const PANEL_GAP: i32 = 16;

/// Score, board, widgets and popups of one single-player session.
pub struct SessionData {
    config: SessionConfig,
    well: Box<dyn Well>,
    font: Box<dyn Font>,
    left: LeftPanel,
    right: RightPanel,
    popups: Vec<TextPopup>,
    texts_need_update: bool,
    score: u32,
    level: u32,
    lineclears_left: u32,
    game_over: bool,
    countdown_cues: [Cue; COUNTDOWN_BEATS],
    screen: Option<(i32, i32)>,
    well_rect: Rect,
}

impl SessionData {
    pub fn new(config: SessionConfig, well: Box<dyn Well>, font: Box<dyn Font>) -> Self {
        let left = LeftPanel::new(font.as_ref(), config.goal_lines, config.start_level);
        let right = RightPanel::new(font.as_ref(), 0);
        Self {
            config,
            well,
            font,
            left,
            right,
            popups: Vec::new(),
            texts_need_update: false,
            score: 0,
            level: config.start_level,
            lineclears_left: config.goal_lines,
            game_over: false,
            countdown_cues: COUNTDOWN_CUES,
            screen: None,
            well_rect: Rect::default(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn font(&self) -> &dyn Font {
        self.font.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lineclears_left(&self) -> u32 {
        self.lineclears_left
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn texts_need_update(&self) -> bool {
        self.texts_need_update
    }

    pub fn popups(&self) -> &[TextPopup] {
        &self.popups
    }

    pub fn left_panel(&self) -> &LeftPanel {
        &self.left
    }

    pub fn right_panel(&self) -> &RightPanel {
        &self.right
    }

    pub fn well_rect(&self) -> Rect {
        self.well_rect
    }

    pub fn is_laid_out(&self) -> bool {
        self.screen.is_some()
    }

    /// Cue for countdown beat `beat`. Panics past the cue list.
    pub fn countdown_cue(&self, beat: usize) -> Cue {
        self.countdown_cues[beat]
    }

    /// Place the well in the middle of the screen and the panels beside it.
    pub fn layout(&mut self, width: i32, height: i32) {
        if self.screen == Some((width, height)) {
            return;
        }
        self.screen = Some((width, height));

        let x = ((width - WELL_W) / 2).max(0);
        let y = ((height - WELL_H) / 2).max(0);
        self.well_rect = Rect::new(x, y, WELL_W, WELL_H);
        self.left
            .set_rect(Rect::new(x - PANEL_GAP - PANEL_W, y, PANEL_W, WELL_H));
        self.right
            .set_rect(Rect::new(self.well_rect.right() + PANEL_GAP, y, PANEL_W, WELL_H));
        debug!(width, height, well = ?self.well_rect, "session layout");
    }

    pub fn update_well(
        &mut self,
        dt: Duration,
        events: &[SessionEvent],
        phase: PhaseKind,
    ) -> WellReport {
        self.well.update(dt, events, phase)
    }

    /// Drive the board outside active play.
    ///
    /// Line clears cannot happen here. A top-out still ends the session.
    pub fn update_well_outside_play(
        &mut self,
        dt: Duration,
        events: &[SessionEvent],
        phase: PhaseKind,
    ) {
        let report = self.update_well(dt, events, phase);
        debug_assert!(
            !matches!(report, WellReport::LinesCleared { .. }),
            "board reported a line clear during {}",
            phase.as_str()
        );
        if report == WellReport::ToppedOut {
            self.set_game_over();
        }
    }

    /// Book a line clear: score, goal counter, level, and a popup.
    pub fn record_line_clear(&mut self, lines: u8, points: u32) {
        self.score = self.score.saturating_add(points);
        self.lineclears_left = self.lineclears_left.saturating_sub(lines as u32);
        if self.lineclears_left == 0 {
            self.level += 1;
            self.lineclears_left = self.config.goal_lines;
        }
        self.texts_need_update = true;
        self.popups
            .push(TextPopup::new(format!("+{points}"), self.font.as_ref()));
        debug!(lines, points, score = self.score, level = self.level, "line clear");
    }

    pub fn set_game_over(&mut self) {
        if !self.game_over {
            debug!(score = self.score, "session ended");
        }
        self.game_over = true;
    }

    /// Re-rasterize panel values if anything changed since the last call.
    pub fn refresh_texts(&mut self) {
        if !self.texts_need_update {
            return;
        }
        let font = self.font.as_ref();
        self.left.update_goal_counter(self.lineclears_left, font);
        self.left.update_level_counter(self.level, font);
        self.right.update_score(self.score, font);
        self.texts_need_update = false;
    }

    /// Anchor new popups against the left panel, then advance all of them.
    pub fn advance_popups(&mut self, dt: Duration) {
        let panel = self.left.rect();
        let laid_out = self.is_laid_out();
        let font = self.font.as_ref();
        for popup in &mut self.popups {
            if laid_out && !popup.is_anchored() {
                let x = (panel.x - 10) as f64 + (panel.w - popup.width() as i32) as f64 / 2.0;
                let y = panel.y as f64 + panel.h as f64 * 0.5;
                popup.set_initial_position(x as i32, y as i32);
            }
            // An unplaced popup holds its first frame.
            if popup.is_anchored() {
                popup.update(dt, font);
            }
        }
    }

    /// Advance the game clock unless the session has ended.
    pub fn advance_gametime(&mut self, dt: Duration) {
        if self.game_over {
            return;
        }
        self.right.update_gametime(dt, self.font.as_ref());
    }

    pub fn discard_expired_popups(&mut self) {
        self.popups.retain(|p| !p.is_expired());
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.well.draw(canvas, self.well_rect);
        self.left.draw(canvas);
        self.right.draw(canvas);
        for popup in &self.popups {
            popup.draw(canvas);
        }
    }
}
