//! 8x8 bitmap text.
//!
//! Glyphs come from the `font8x8` basic Latin table. Each glyph row is one
//! byte with bit 0 as the leftmost pixel. Text is scaled by drawing each set
//! bit as a `scale` x `scale` block, with one scaled pixel of spacing after
//! every character.

use font8x8::{UnicodeFonts, BASIC_FONTS};

use super::framebuffer::FrameBuffer;
use crate::colors::Color;

pub const GLYPH_SIZE: u32 = 8;

/// Horizontal advance per character at `scale`.
#[inline]
pub fn char_advance(scale: u32) -> u32 {
    (GLYPH_SIZE + 1) * scale
}

/// Width in pixels of `text` drawn at `scale`, without trailing spacing.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    (count * char_advance(scale)).saturating_sub(scale)
}

/// Draws one character with its top-left corner at `(x, y)`.
///
/// Characters outside the basic table draw nothing.
pub fn draw_char(buffer: &mut FrameBuffer, x: i32, y: i32, c: char, color: u32, scale: u32) {
    let Some(glyph) = BASIC_FONTS.get(c) else {
        return;
    };
    let step = scale as i32;
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..GLYPH_SIZE {
            if bits & (1 << col) != 0 {
                buffer.fill_rect(
                    x + col as i32 * step,
                    y + row as i32 * step,
                    scale,
                    scale,
                    color,
                );
            }
        }
    }
}

/// Draws `text` starting at `(x, y)` (top-left).
pub fn draw_text(buffer: &mut FrameBuffer, x: i32, y: i32, text: &str, color: Color, scale: u32) {
    let argb = color.to_argb();
    let advance = char_advance(scale) as i32;
    for (i, c) in text.chars().enumerate() {
        draw_char(buffer, x + i as i32 * advance, y, c, argb, scale);
    }
}

/// Draws `text` centered on `(center_x, center_y)`.
pub fn draw_text_centered(
    buffer: &mut FrameBuffer,
    center_x: i32,
    center_y: i32,
    text: &str,
    color: Color,
    scale: u32,
) {
    let x = center_x - text_width(text, scale) as i32 / 2;
    let y = center_y - (GLYPH_SIZE * scale) as i32 / 2;
    draw_text(buffer, x, y, text, color, scale);
}
