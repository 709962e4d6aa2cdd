//! One glyph per cell.

use tui_stacker_session::{Font, Sprite};

use crate::canvas::{CELL_PX_H, CELL_PX_W};
use crate::types::Rgba;

/// Rasterizes text as terminal glyphs. Multi-line text is split on `\n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellFont;

impl Font for CellFont {
    fn render_text(&self, text: &str, color: Rgba) -> Sprite {
        let lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
        let rows = lines.len() as u32;
        Sprite::new(lines, color, cols * CELL_PX_W as u32, rows * CELL_PX_H as u32)
    }
}
