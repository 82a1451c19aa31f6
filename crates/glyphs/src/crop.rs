//! # Cropping rendered characters

use image::{imageops, Rgb, RgbImage};

use crate::{Error, Result};

/// Inclusive bounds of the ink in an image
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoundingBox {
    /// First row with ink
    pub min_row: u32,
    /// Last row with ink
    pub max_row: u32,
    /// First column with ink
    pub min_col: u32,
    /// Last column with ink
    pub max_col: u32,
}

impl BoundingBox {
    fn point(row: u32, col: u32) -> Self {
        Self {
            min_row: row,
            max_row: row,
            min_col: col,
            max_col: col,
        }
    }

    fn include(&mut self, row: u32, col: u32) {
        self.min_row = self.min_row.min(row);
        self.max_row = self.max_row.max(row);
        self.min_col = self.min_col.min(col);
        self.max_col = self.max_col.max(col);
    }

    /// Number of columns
    pub fn width(&self) -> u32 {
        self.max_col - self.min_col + 1
    }

    /// Number of rows
    pub fn height(&self) -> u32 {
        self.max_row - self.min_row + 1
    }
}

/// Whether a pixel counts as ink
///
/// Only the red channel is compared against the white background.
pub fn is_ink(pixel: &Rgb<u8>) -> bool {
    pixel[0] != 255
}

/// Find the bounds of all ink, `None` for a blank image
pub fn bounding_box(img: &RgbImage) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;
    for (col, row, pixel) in img.enumerate_pixels() {
        if !is_ink(pixel) {
            continue;
        }
        bbox = Some(match bbox {
            Some(mut b) => {
                b.include(row, col);
                b
            }
            None => BoundingBox::point(row, col),
        });
    }
    bbox
}

/// Cut `img` down to the bounding box of its ink
///
/// Row bounds select the vertical extent, column bounds the horizontal one.
/// Fails with [`Error::EmptyGlyph`] if there is no ink at all.
pub fn crop(img: &RgbImage) -> Result<RgbImage> {
    let bbox = bounding_box(img).ok_or(Error::EmptyGlyph)?;
    let view = imageops::crop_imm(img, bbox.min_col, bbox.min_row, bbox.width(), bbox.height());
    Ok(view.to_image())
}
