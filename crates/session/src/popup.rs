//! Floating score popup.

use std::time::Duration;

use tui_stacker_core::Animator;

use crate::gfx::{Canvas, Font, Sprite};
use crate::types::{POPUP_COLOR, POPUP_LIFETIME_MS, POPUP_RISE};

/// Text that floats upward while fading out.
///
/// The rise and the fade share one duration, so the text becomes fully
/// transparent exactly when it stops moving. The owner assigns the anchor
/// once, after construction and before the first update, and drops the popup
/// once [`TextPopup::is_expired`] returns `true`.
#[derive(Debug, Clone)]
pub struct TextPopup {
    text: String,
    anchor: Option<(i32, i32)>,
    rise: Animator<f64>,
    alpha: Animator<u8>,
    sprite: Sprite,
}

impl TextPopup {
    pub fn new(text: impl Into<String>, font: &dyn Font) -> Self {
        let text = text.into();
        let rise = Animator::new(Duration::from_millis(POPUP_LIFETIME_MS as u64), |t| {
            t * POPUP_RISE
        });
        let alpha = Animator::new(rise.duration(), |t| ((1.0 - t) * 255.0) as u8);
        let sprite = font.render_text(&text, POPUP_COLOR);
        Self {
            text,
            anchor: None,
            rise,
            alpha,
            sprite,
        }
    }

    pub fn set_initial_position(&mut self, x: i32, y: i32) {
        debug_assert!(self.anchor.is_none(), "popup anchored twice");
        self.anchor = Some((x, y));
    }

    pub fn is_anchored(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> u32 {
        self.sprite.width()
    }

    pub fn update(&mut self, dt: Duration, font: &dyn Font) {
        self.rise.advance(dt);
        self.alpha.advance(dt);
        self.sprite = font.render_text(&self.text, POPUP_COLOR.with_alpha(self.alpha.value()));
    }

    /// Current upward offset from the anchor.
    pub fn offset(&self) -> f64 {
        self.rise.value()
    }

    pub fn opacity(&self) -> u8 {
        self.alpha.value()
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn is_expired(&self) -> bool {
        !self.rise.running()
    }

    /// Where the sprite goes this frame; `None` until anchored.
    pub fn draw_position(&self) -> Option<(i32, i32)> {
        self.anchor
            .map(|(x, y)| (x, y - self.offset().round() as i32))
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if let Some((x, y)) = self.draw_position() {
            canvas.draw_sprite(&self.sprite, x, y);
        }
    }
}
