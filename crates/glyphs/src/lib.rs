#![warn(missing_docs)]
//! # Glyph sample images
//!
//! This crate turns the characters of a TrueType font into a directory of
//! uniformly sized sample images, e.g. to build training sets for glyph
//! image models.
//!
//! The pipeline has four stages:
//!
//! 1. [`charset`]: load the ordered list of characters to draw
//! 2. [`render`]: draw a character onto an oversized white canvas
//! 3. [`crop`]: cut the canvas down to the bounding box of the ink
//! 4. [`normalize`]: pad the cropped glyph to a square and resize it
//!
//! [`sample`] drives stages 2 and 3 for one font.

pub mod charset;
pub mod crop;
mod error;
pub mod font;
mod files;
pub mod normalize;
pub mod render;
pub mod sample;

pub use error::{Error, Result};
pub use files::index_name;

#[doc(hidden)]
pub use image;

#[cfg(test)]
pub(crate) fn test_font() -> Option<font::GlyphFont> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
    ];
    let path = CANDIDATES
        .iter()
        .map(std::path::Path::new)
        .find(|p| p.is_file());
    match path {
        Some(path) => Some(font::GlyphFont::load(path, 64.0).unwrap()),
        None => {
            eprintln!("no system font found, skipping");
            None
        }
    }
}
