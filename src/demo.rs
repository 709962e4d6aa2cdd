//! Stand-in board for running the session without a piece engine.

use std::time::Duration;

use tui_stacker_core::IntervalTimer;
use tui_stacker_session::{Canvas, Well, WellReport};
use tui_stacker_types::{InputType, PhaseKind, Rect, Rgba, SessionEvent, LINE_SCORES};

const WELL_BG: Rgba = Rgba::from_u32(0x1010_18FF);
const PREVIEW_COLOR: Rgba = Rgba::from_u32(0x50C8_78FF);
const PREVIEW_BLINK: Duration = Duration::from_millis(400);

/// Empty well that reports a line clear for every hard drop.
///
/// The clear size cycles 1, 2, 3, 4. A next-piece preview blinks above the
/// well in every phase, so board-only animation stays visible during the
/// countdown and pause.
#[derive(Debug, Clone)]
pub struct DemoWell {
    next_clear: u8,
    blink: IntervalTimer,
    preview_on: bool,
}

impl Default for DemoWell {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoWell {
    pub fn new() -> Self {
        Self {
            next_clear: 1,
            blink: IntervalTimer::new(PREVIEW_BLINK),
            preview_on: true,
        }
    }

    pub fn preview_visible(&self) -> bool {
        self.preview_on
    }

    fn take_clear(&mut self) -> WellReport {
        let lines = self.next_clear;
        self.next_clear = lines % 4 + 1;
        WellReport::LinesCleared {
            lines,
            points: LINE_SCORES[lines as usize],
        }
    }
}

impl Well for DemoWell {
    fn update(&mut self, dt: Duration, events: &[SessionEvent], phase: PhaseKind) -> WellReport {
        if let Some(tick) = self.blink.advance(dt) {
            if tick.completed {
                self.blink.restart();
                self.preview_on = !self.preview_on;
            }
        }

        if phase != PhaseKind::Gameplay {
            return WellReport::Idle;
        }
        // One report per frame; extra drops in the same frame are ignored.
        if events.iter().any(|e| e.is_press(InputType::HardDrop)) {
            return self.take_clear();
        }
        WellReport::Idle
    }

    fn draw(&self, canvas: &mut dyn Canvas, rect: Rect) {
        canvas.fill_rect(rect, WELL_BG);
        if self.preview_on {
            canvas.fill_rect(
                Rect::new(rect.center_x() - 16, rect.y - 24, 32, 16),
                PREVIEW_COLOR,
            );
        }
    }
}
