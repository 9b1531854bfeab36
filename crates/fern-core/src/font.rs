//! Bitmap text rendering.
//!
//! A fixed 8×8 glyph grid covering uppercase A–Z and the digits 0–9. One
//! byte per row, high bit = leftmost pixel. Anything else (including
//! lowercase and space) renders nothing and advances the cursor by half a
//! cell.

use crate::{Canvas, Color};

/// Horizontal advance after a drawn glyph, in unscaled pixels.
pub const GLYPH_ADVANCE: i32 = 8;
/// Horizontal advance for a space or unsupported character.
pub const BLANK_ADVANCE: i32 = 4;

#[rustfmt::skip]
const GLYPHS: [[u8; 8]; 36] = [
    // A–Z
    [0x18, 0x3C, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x00],
    [0x7C, 0x66, 0x66, 0x7C, 0x66, 0x66, 0x7C, 0x00],
    [0x3C, 0x66, 0x60, 0x60, 0x60, 0x66, 0x3C, 0x00],
    [0x78, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0x78, 0x00],
    [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x7E, 0x00],
    [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x60, 0x00],
    [0x3C, 0x66, 0x60, 0x6E, 0x66, 0x66, 0x3E, 0x00],
    [0x66, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x00],
    [0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00],
    [0x06, 0x06, 0x06, 0x06, 0x66, 0x66, 0x3C, 0x00],
    [0x66, 0x6C, 0x78, 0x70, 0x78, 0x6C, 0x66, 0x00],
    [0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E, 0x00],
    [0x63, 0x77, 0x7F, 0x6B, 0x63, 0x63, 0x63, 0x00],
    [0x66, 0x76, 0x7E, 0x7E, 0x6E, 0x66, 0x66, 0x00],
    [0x3C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00],
    [0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, 0x60, 0x00],
    [0x3C, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x0E, 0x00],
    [0x7C, 0x66, 0x66, 0x7C, 0x78, 0x6C, 0x66, 0x00],
    [0x3C, 0x66, 0x60, 0x3C, 0x06, 0x66, 0x3C, 0x00],
    [0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00],
    [0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00],
    [0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00],
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00],
    [0x66, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x66, 0x00],
    [0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x00],
    [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x7E, 0x00],
    // 0–9
    [0x3C, 0x66, 0x6E, 0x76, 0x66, 0x66, 0x3C, 0x00],
    [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00],
    [0x3C, 0x66, 0x06, 0x0C, 0x18, 0x30, 0x7E, 0x00],
    [0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00],
    [0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x00],
    [0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00],
    [0x3C, 0x66, 0x60, 0x7C, 0x66, 0x66, 0x3C, 0x00],
    [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00],
    [0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00],
    [0x3C, 0x66, 0x66, 0x3E, 0x06, 0x66, 0x3C, 0x00],
];

/// Look up the 8×8 bitmap for a supported character.
pub fn glyph(c: char) -> Option<&'static [u8; 8]> {
    match c {
        'A'..='Z' => Some(&GLYPHS[c as usize - 'A' as usize]),
        '0'..='9' => Some(&GLYPHS[26 + c as usize - '0' as usize]),
        _ => None,
    }
}

/// Draw one character. Each set bit becomes a `scale × scale` pixel block.
/// Unsupported characters draw nothing.
pub fn draw_char(canvas: &mut Canvas, c: char, x: i32, y: i32, scale: i32, color: Color) {
    let Some(rows) = glyph(c) else { return };
    for (row, &bits) in rows.iter().enumerate() {
        for col in 0..8i32 {
            if (bits >> (7 - col)) & 1 != 0 {
                crate::draw::rect(
                    canvas,
                    x + col * scale,
                    y + row as i32 * scale,
                    scale,
                    scale,
                    color,
                );
            }
        }
    }
}

/// Draw a string left to right. Supported characters advance the cursor by
/// `8 * scale`; spaces and unsupported characters advance by `4 * scale`
/// without drawing. No wrapping.
pub fn draw_text(canvas: &mut Canvas, text: &str, x: i32, y: i32, scale: i32, color: Color) {
    let mut cursor = x;
    for c in text.chars() {
        if glyph(c).is_some() {
            draw_char(canvas, c, cursor, y, scale, color);
            cursor += GLYPH_ADVANCE * scale;
        } else {
            cursor += BLANK_ADVANCE * scale;
        }
    }
}

/// Pixel width `draw_text` will occupy, used for centering labels.
pub fn text_width(text: &str, scale: i32) -> i32 {
    text.chars()
        .map(|c| if glyph(c).is_some() { GLYPH_ADVANCE } else { BLANK_ADVANCE })
        .sum::<i32>()
        * scale
}
