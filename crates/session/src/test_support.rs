use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::config::SessionConfig;
use crate::data::SessionData;
use crate::gfx::{Canvas, Font, Sprite};
use crate::types::{InputEvent, InputType, PhaseKind, Rect, Rgba, SessionEvent};
use crate::widgets::{Well, WellReport};

/// Monospace font with 8x16 glyphs that counts its renders.
#[derive(Debug, Default)]
pub struct GridFont {
    renders: Cell<usize>,
}

impl GridFont {
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }
}

impl Font for GridFont {
    fn render_text(&self, text: &str, color: Rgba) -> Sprite {
        self.renders.set(self.renders.get() + 1);
        let lines: Vec<String> = text.lines().map(str::to_owned).collect();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let rows = lines.len();
        Sprite::new(lines, color, cols as u32 * 8, rows as u32 * 16)
    }
}

/// Canvas that records draw calls instead of rasterizing them.
#[derive(Debug)]
pub struct RecordingCanvas {
    width: i32,
    height: i32,
    pub rects: Vec<(Rect, Rgba)>,
    pub sprites: Vec<(String, i32, i32)>,
}

impl RecordingCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            rects: Vec::new(),
            sprites: Vec::new(),
        }
    }
}

impl Canvas for RecordingCanvas {
    fn screen_width(&self) -> i32 {
        self.width
    }

    fn screen_height(&self) -> i32 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.rects.push((rect, color));
    }

    fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32) {
        self.sprites.push((sprite.lines().join("\n"), x, y));
    }
}

/// Board that replays queued reports and remembers what drove it.
#[derive(Debug, Default, Clone)]
pub struct ScriptedWell {
    pub reports: Rc<RefCell<VecDeque<WellReport>>>,
    pub phases: Rc<RefCell<Vec<PhaseKind>>>,
    pub events: Rc<RefCell<Vec<SessionEvent>>>,
}

impl Well for ScriptedWell {
    fn update(&mut self, _dt: Duration, events: &[SessionEvent], phase: PhaseKind) -> WellReport {
        self.phases.borrow_mut().push(phase);
        self.events.borrow_mut().extend_from_slice(events);
        self.reports
            .borrow_mut()
            .pop_front()
            .unwrap_or(WellReport::Idle)
    }

    fn draw(&self, _canvas: &mut dyn Canvas, _rect: Rect) {}
}

pub fn session_with(well: ScriptedWell, config: SessionConfig) -> SessionData {
    SessionData::new(config, Box::new(well), Box::new(GridFont::default()))
}

pub fn pressed(kind: InputType) -> SessionEvent {
    SessionEvent::Input(InputEvent::pressed(kind))
}

pub fn release(kind: InputType) -> SessionEvent {
    SessionEvent::Input(InputEvent::released(kind))
}
