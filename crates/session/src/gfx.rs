//! Rendering collaborator interfaces.
//!
//! Coordinates are logical pixels with the origin at the top-left corner.
//! How a logical pixel maps onto the output device is up to the implementor.

use crate::types::{Rect, Rgba};

/// A block of rasterized text in a single colour.
///
/// The colour's alpha channel is the sprite's opacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    lines: Vec<String>,
    color: Rgba,
    width: u32,
    height: u32,
}

impl Sprite {
    pub fn new(lines: Vec<String>, color: Rgba, width: u32, height: u32) -> Self {
        Self {
            lines,
            color,
            width,
            height,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Rasterizes text into drawable sprites.
pub trait Font {
    fn render_text(&self, text: &str, color: Rgba) -> Sprite;
}

/// Draw target for one frame.
pub trait Canvas {
    fn screen_width(&self) -> i32;
    fn screen_height(&self) -> i32;

    /// Fill `rect`, alpha-blending `color` over what is already there.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Draw `sprite` with its top-left corner at `(x, y)`.
    fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32);

    fn screen_rect(&self) -> Rect {
        Rect::new(0, 0, self.screen_width(), self.screen_height())
    }
}
