//! # Drawing characters
//!
//! Every character is drawn in black onto its own white canvas. The canvas
//! is [`CANVAS_MARGIN`] pixels larger than the requested size in both
//! directions, so that overhanging glyphs are not clipped before the
//! bounding box is cropped.

use image::{Rgb, RgbImage};

use crate::font::GlyphFont;

/// Extra pixels added to both canvas dimensions
pub const CANVAS_MARGIN: u32 = 300;

/// Canvas and padding color
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Shift applied to the centered draw position
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Offset {
    /// Pixels to the right
    pub x: i32,
    /// Pixels down
    pub y: i32,
}

/// Draw `ch` centered on a fresh canvas
///
/// The text box reported by [`GlyphFont::text_extent`] is centered on the
/// `(canvas_size + 300)²` canvas, then moved by `offset`.
pub fn draw_example(ch: char, font: &GlyphFont, canvas_size: u32, offset: Offset) -> RgbImage {
    let side = canvas_size + CANVAS_MARGIN;
    let mut img = RgbImage::from_pixel(side, side, BACKGROUND);

    let (text_width, text_height) = font.text_extent(ch);
    let x = (side as i32 - text_width as i32).div_euclid(2) + offset.x;
    let y = (side as i32 - text_height as i32).div_euclid(2) + offset.y;
    draw_char(&mut img, font, ch, x, y);
    img
}

/// Draw `ch` with the top left of its text box at `(x, y)`
pub fn draw_char(img: &mut RgbImage, font: &GlyphFont, ch: char, x: i32, y: i32) {
    let (metrics, coverage) = font.rasterize(ch);
    if metrics.width == 0 || metrics.height == 0 {
        return;
    }

    let baseline = y + font.ascent().round() as i32;
    let left = x + metrics.xmin;
    let top = baseline - (metrics.height as i32 + metrics.ymin);

    for (row, line) in coverage.chunks_exact(metrics.width).enumerate() {
        let py = top + row as i32;
        if py < 0 || py >= img.height() as i32 {
            continue;
        }
        for (col, &ink) in line.iter().enumerate() {
            let px = left + col as i32;
            if px < 0 || px >= img.width() as i32 || ink == 0 {
                continue;
            }
            let pixel = img.get_pixel_mut(px as u32, py as u32);
            pixel.0 = pixel.0.map(|c| darken(c, ink));
        }
    }
}

/// Blend black over `value` with the given coverage
fn darken(value: u8, ink: u8) -> u8 {
    (u16::from(value) * u16::from(255 - ink) / 255) as u8
}
