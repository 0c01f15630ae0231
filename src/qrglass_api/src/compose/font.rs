//! 8x8 bitmap glyphs for the badge initials (A-Z, 0-9). Rows are stored
//! top-to-bottom with the least significant bit on the left. Glyphs are drawn
//! at an integer scale; characters without a glyph render as a hollow box.

use image::{Rgba, RgbaImage};

use super::geometry::blend_pixel;

pub const GLYPH_SIZE: u32 = 8;

const FALLBACK: [u8; 8] = [0x00, 0x7E, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];

fn glyph(ch: char) -> [u8; 8] {
    match ch {
        ' ' => [0x00; 8],
        '0' => [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00],
        '1' => [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00],
        '2' => [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00],
        '3' => [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00],
        '4' => [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00],
        '5' => [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00],
        '6' => [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00],
        '7' => [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00],
        '8' => [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00],
        '9' => [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00],
        'A' => [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00],
        'B' => [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00],
        'C' => [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00],
        'D' => [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00],
        'E' => [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00],
        'F' => [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00],
        'G' => [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00],
        'H' => [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00],
        'I' => [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00],
        'J' => [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00],
        'K' => [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00],
        'L' => [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00],
        'M' => [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00],
        'N' => [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00],
        'O' => [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00],
        'P' => [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00],
        'Q' => [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00],
        'R' => [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00],
        'S' => [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00],
        'T' => [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00],
        'U' => [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00],
        'V' => [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00],
        'W' => [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00],
        'X' => [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00],
        'Y' => [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00],
        'Z' => [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00],
        _ => FALLBACK,
    }
}

pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale
}

pub fn draw_text(
    img: &mut RgbaImage,
    text: &str,
    x: i64,
    y: i64,
    scale: u32,
    color: Rgba<u8>,
) {
    let mut cx = x;
    for ch in text.chars() {
        draw_char(img, ch, cx, y, scale, color);
        cx += (GLYPH_SIZE * scale) as i64;
    }
}

fn draw_char(img: &mut RgbaImage, ch: char, x: i64, y: i64, scale: u32, color: Rgba<u8>) {
    let rows = glyph(ch);
    for (row, &bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_SIZE {
            if (bits >> col) & 1 == 1 {
                for sy in 0..scale {
                    for sx in 0..scale {
                        blend_pixel(
                            img,
                            x + (col * scale + sx) as i64,
                            y + (row as u32 * scale + sy) as i64,
                            color,
                        );
                    }
                }
            }
        }
    }
}
