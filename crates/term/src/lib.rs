//! Terminal rendering for the session.
//!
//! The session draws in logical pixels through [`Canvas`](tui_stacker_session::Canvas).
//! This crate maps that onto a grid of styled character cells:
//!
//! - [`fb`]: the cell framebuffer
//! - [`canvas`]: a `Canvas` over the framebuffer, 8x16 logical pixels per cell
//! - [`font`]: a `Font` rasterizing one glyph per cell
//! - [`renderer`]: terminal setup/teardown and diffed presentation

pub mod canvas;
pub mod fb;
pub mod font;
pub mod renderer;

pub use tui_stacker_types as types;

pub use canvas::{CellCanvas, CELL_PX_H, CELL_PX_W};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use font::CellFont;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
