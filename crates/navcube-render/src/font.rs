//! Minimal 5x7 bitmap font for the face labels.
//!
//! Only uppercase A-Z; the cube labels never need anything else. Each glyph
//! row is a 5-bit pattern, bit 4 being the leftmost pixel.

use image::{Rgba, RgbaImage};

/// Glyph width in pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in pixels.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal spacing between glyphs, in glyph pixels.
pub const GLYPH_SPACING: u32 = 1;

const GLYPHS: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

/// Returns the row patterns for an uppercase letter, `None` otherwise.
#[must_use]
pub fn glyph(c: char) -> Option<&'static [u8; 7]> {
    if c.is_ascii_uppercase() {
        GLYPHS.get((c as usize) - ('A' as usize))
    } else {
        None
    }
}

/// Returns the pixel width of a string at the given integer scale.
/// Unsupported characters are skipped.
#[must_use]
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().filter(|c| glyph(*c).is_some()).count();
    if count == 0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation)]
    let count = count as u32;
    (count * GLYPH_WIDTH + (count - 1) * GLYPH_SPACING) * scale
}

/// Draws a string into the image at `(x, y)` (top-left of the text) with an
/// integer scale factor. Pixels outside the image are clipped.
pub fn draw_text(img: &mut RgbaImage, text: &str, x: u32, y: u32, scale: u32, color: Rgba<u8>) {
    let scale = scale.max(1);
    let mut pen_x = x;
    for c in text.chars() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        for (row, pattern) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if pattern & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                #[allow(clippy::cast_possible_truncation)]
                let row = row as u32;
                for dy in 0..scale {
                    for dx in 0..scale {
                        let px = pen_x + col * scale + dx;
                        let py = y + row * scale + dy;
                        if px < img.width() && py < img.height() {
                            img.put_pixel(px, py, color);
                        }
                    }
                }
            }
        }
        pen_x += (GLYPH_WIDTH + GLYPH_SPACING) * scale;
    }
}
