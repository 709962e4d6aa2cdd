//! `Canvas` implementation over a cell framebuffer.

use tui_stacker_session::{Canvas, Sprite};

use crate::fb::{FrameBuffer, Rgb};
use crate::types::{Rect, Rgba};

/// Logical pixels per terminal cell.
pub const CELL_PX_W: i32 = 8;
pub const CELL_PX_H: i32 = 16;

/// Draws into a borrowed framebuffer for one frame.
///
/// Rectangles cover every cell they touch. Everything is clipped to the
/// framebuffer.
pub struct CellCanvas<'a> {
    fb: &'a mut FrameBuffer,
}

impl<'a> CellCanvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer) -> Self {
        Self { fb }
    }

    /// Cell span `[start, end)` covered by the pixel span `[from, to)`,
    /// clipped to `0..limit`.
    fn cell_span(from: i32, to: i32, px: i32, limit: u16) -> (u16, u16) {
        let start = from.div_euclid(px).clamp(0, limit as i32);
        let end = (to + px - 1).div_euclid(px).clamp(0, limit as i32);
        (start as u16, end as u16)
    }
}

impl Canvas for CellCanvas<'_> {
    fn screen_width(&self) -> i32 {
        self.fb.width() as i32 * CELL_PX_W
    }

    fn screen_height(&self) -> i32 {
        self.fb.height() as i32 * CELL_PX_H
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if color.a == 0 || rect.w <= 0 || rect.h <= 0 {
            return;
        }
        let to = Rgb::from(color);
        let (x0, x1) = Self::cell_span(rect.x, rect.right(), CELL_PX_W, self.fb.width());
        let (y0, y1) = Self::cell_span(rect.y, rect.bottom(), CELL_PX_H, self.fb.height());
        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(cell) = self.fb.get_mut(x, y) {
                    cell.style.bg = cell.style.bg.blend(to, color.a);
                    cell.style.fg = cell.style.fg.blend(to, color.a);
                }
            }
        }
    }

    fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32) {
        let color = sprite.color();
        if color.a == 0 {
            return;
        }
        let to = Rgb::from(color);
        let col0 = x.div_euclid(CELL_PX_W);
        let row0 = y.div_euclid(CELL_PX_H);
        for (dy, line) in sprite.lines().iter().enumerate() {
            let row = row0 + dy as i32;
            if row < 0 {
                continue;
            }
            for (dx, ch) in line.chars().enumerate() {
                let col = col0 + dx as i32;
                if col < 0 || ch == ' ' {
                    continue;
                }
                let (Ok(cx), Ok(cy)) = (u16::try_from(col), u16::try_from(row)) else {
                    continue;
                };
                if let Some(cell) = self.fb.get_mut(cx, cy) {
                    cell.ch = ch;
                    cell.style.fg = cell.style.bg.blend(to, color.a);
                    cell.style.bold = true;
                }
            }
        }
    }
}
