//! Shared types and constants for the single-player session.
//!
//! Everything here is plain data with no dependencies, so it can be used by
//! the timing core, the session state machine, the input mapping and the
//! terminal renderer alike.
//!
//! # Timing Constants
//!
//! All durations are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Target frame interval (~60 FPS) |
//! | `FADE_IN_MS` | 500 | Opening fade from black |
//! | `COUNTDOWN_BEAT_MS` | 800 | Interval between countdown cues |
//! | `POPUP_LIFETIME_MS` | 2000 | Float + fade time of a score popup |
//!
//! # Examples
//!
//! ```
//! use tui_stacker_types::{InputEvent, InputType, SessionEvent, WindowEvent};
//!
//! let pause = SessionEvent::Input(InputEvent::pressed(InputType::GamePause));
//! assert!(pause.is_pause_press());
//!
//! let focus = SessionEvent::Window(WindowEvent::FocusLost);
//! assert!(!focus.is_pause_press());
//! assert!(focus.is_focus_lost());
//! ```

/// Target frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Opening fade duration (500ms)
pub const FADE_IN_MS: u32 = 500;

/// Countdown beat interval (800ms)
pub const COUNTDOWN_BEAT_MS: u32 = 800;

/// Number of countdown beats before gameplay resumes.
pub const COUNTDOWN_BEATS: usize = 3;

/// Lifetime of a floating score popup (2s)
pub const POPUP_LIFETIME_MS: u32 = 2000;

/// Distance a score popup floats upward over its lifetime, in logical pixels.
pub const POPUP_RISE: f64 = 100.0;

/// Text colour of score popups. The alpha channel is replaced while fading.
pub const POPUP_COLOR: Rgba = Rgba::from_u32(0xEEEE_EEFF);

/// Lines to clear before the level goes up.
pub const DEFAULT_GOAL_LINES: u32 = 10;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of one board cell in logical pixels.
pub const BOARD_CELL_PX: i32 = 16;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Audio cues the session asks the audio collaborator to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    CountdownThree,
    CountdownTwo,
    CountdownOne,
    LineClear,
}

impl Cue {
    /// Number of distinct cues.
    pub const COUNT: usize = 4;
}

/// Countdown cues in the order they are played, one per beat.
pub const COUNTDOWN_CUES: [Cue; COUNTDOWN_BEATS] =
    [Cue::CountdownThree, Cue::CountdownTwo, Cue::CountdownOne];

/// The four phases of a single-player session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    FadeIn,
    Countdown,
    Gameplay,
    Pause,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKind::FadeIn => "fadeIn",
            PhaseKind::Countdown => "countdown",
            PhaseKind::Gameplay => "gameplay",
            PhaseKind::Pause => "pause",
        }
    }
}

/// Logical input types produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Hold,
    /// Pause toggle. Only its pressed edge is acted on.
    GamePause,
}

/// A pressed or released edge of one logical input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    kind: InputType,
    down: bool,
}

impl InputEvent {
    pub const fn pressed(kind: InputType) -> Self {
        Self { kind, down: true }
    }

    pub const fn released(kind: InputType) -> Self {
        Self { kind, down: false }
    }

    pub fn kind(&self) -> InputType {
        self.kind
    }

    /// `true` for a pressed edge.
    pub fn down(&self) -> bool {
        self.down
    }
}

/// Window-level notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    FocusLost,
    FocusGained,
    Resized { cols: u16, rows: u16 },
}

/// One entry of a frame's ordered event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Window(WindowEvent),
    Input(InputEvent),
}

impl SessionEvent {
    pub fn is_focus_lost(&self) -> bool {
        matches!(self, SessionEvent::Window(WindowEvent::FocusLost))
    }

    pub fn is_pause_press(&self) -> bool {
        matches!(
            self,
            SessionEvent::Input(input) if input.kind() == InputType::GamePause && input.down()
        )
    }

    pub fn is_press(&self, kind: InputType) -> bool {
        matches!(self, SessionEvent::Input(input) if input.kind() == kind && input.down())
    }
}

/// 32-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build from a packed `0xRRGGBBAA` value.
    pub const fn from_u32(rgba: u32) -> Self {
        Self {
            r: (rgba >> 24) as u8,
            g: (rgba >> 16) as u8,
            b: (rgba >> 8) as u8,
            a: rgba as u8,
        }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }
}
