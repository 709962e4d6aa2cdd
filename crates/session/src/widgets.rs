//! Board widget interface and the two side panels.

use std::time::Duration;

use crate::gfx::{Canvas, Font, Sprite};
use crate::types::{PhaseKind, Rect, Rgba, SessionEvent};

const PANEL_BG: Rgba = Rgba::from_u32(0x1E1E_28FF);
const LABEL_COLOR: Rgba = Rgba::from_u32(0xAAAA_B4FF);
const VALUE_COLOR: Rgba = Rgba::from_u32(0xFFFF_FFFF);

/// Inner padding and row pitch of panel text, in logical pixels.
const PANEL_PAD: i32 = 8;
const PANEL_ROW: i32 = 16;

/// What the board widget reports back after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellReport {
    Idle,
    LinesCleared { lines: u8, points: u32 },
    ToppedOut,
}

/// The gameplay board. Piece movement and line-clear rules live behind this
/// trait; the session only forwards events and reads the report.
pub trait Well {
    fn update(&mut self, dt: Duration, events: &[SessionEvent], phase: PhaseKind) -> WellReport;
    fn draw(&self, canvas: &mut dyn Canvas, rect: Rect);
}

/// Goal counter and level, left of the well.
#[derive(Debug, Clone)]
pub struct LeftPanel {
    rect: Rect,
    goal_label: Sprite,
    goal: Sprite,
    level_label: Sprite,
    level: Sprite,
}

impl LeftPanel {
    pub fn new(font: &dyn Font, goal: u32, level: u32) -> Self {
        Self {
            rect: Rect::default(),
            goal_label: font.render_text("GOAL", LABEL_COLOR),
            goal: font.render_text(&goal.to_string(), VALUE_COLOR),
            level_label: font.render_text("LEVEL", LABEL_COLOR),
            level: font.render_text(&level.to_string(), VALUE_COLOR),
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn update_goal_counter(&mut self, lines_left: u32, font: &dyn Font) {
        self.goal = font.render_text(&lines_left.to_string(), VALUE_COLOR);
    }

    pub fn update_level_counter(&mut self, level: u32, font: &dyn Font) {
        self.level = font.render_text(&level.to_string(), VALUE_COLOR);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.rect, PANEL_BG);
        let x = self.rect.x + PANEL_PAD;
        let y = self.rect.y + PANEL_ROW;
        canvas.draw_sprite(&self.goal_label, x, y);
        canvas.draw_sprite(&self.goal, x, y + PANEL_ROW);
        canvas.draw_sprite(&self.level_label, x, y + 3 * PANEL_ROW);
        canvas.draw_sprite(&self.level, x, y + 4 * PANEL_ROW);
    }
}

/// Score and elapsed game time, right of the well.
#[derive(Debug, Clone)]
pub struct RightPanel {
    rect: Rect,
    score_label: Sprite,
    score: Sprite,
    time_label: Sprite,
    time: Sprite,
    gametime: Duration,
    shown_secs: u64,
}

impl RightPanel {
    pub fn new(font: &dyn Font, score: u32) -> Self {
        Self {
            rect: Rect::default(),
            score_label: font.render_text("SCORE", LABEL_COLOR),
            score: font.render_text(&score.to_string(), VALUE_COLOR),
            time_label: font.render_text("TIME", LABEL_COLOR),
            time: font.render_text(&format_gametime(Duration::ZERO), VALUE_COLOR),
            gametime: Duration::ZERO,
            shown_secs: 0,
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn gametime(&self) -> Duration {
        self.gametime
    }

    pub fn update_score(&mut self, score: u32, font: &dyn Font) {
        self.score = font.render_text(&score.to_string(), VALUE_COLOR);
    }

    /// Accumulate play time. The text is only re-rasterized when the shown
    /// second changes.
    pub fn update_gametime(&mut self, dt: Duration, font: &dyn Font) {
        self.gametime = self.gametime.saturating_add(dt);
        let secs = self.gametime.as_secs();
        if secs != self.shown_secs {
            self.shown_secs = secs;
            self.time = font.render_text(&format_gametime(self.gametime), VALUE_COLOR);
        }
    }

    pub fn time_text(&self) -> &str {
        self.time.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.rect, PANEL_BG);
        let x = self.rect.x + PANEL_PAD;
        let y = self.rect.y + PANEL_ROW;
        canvas.draw_sprite(&self.score_label, x, y);
        canvas.draw_sprite(&self.score, x, y + PANEL_ROW);
        canvas.draw_sprite(&self.time_label, x, y + 3 * PANEL_ROW);
        canvas.draw_sprite(&self.time, x, y + 4 * PANEL_ROW);
    }
}

/// Format play time as `MM:SS`.
pub fn format_gametime(t: Duration) -> String {
    let secs = t.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
