//! # Normalizing cropped samples
//!
//! The cropped glyphs of one font come in all sizes. Each one is pasted
//! centered onto a white square and the square is resized to the output
//! resolution, so that every sample ends up with the same dimensions.

use std::path::Path;

use image::{imageops, imageops::FilterType, RgbImage};
use log::debug;

use crate::{
    files::{index_name, load_rgb, save_png},
    render::BACKGROUND,
    Error, Result,
};

/// Default side length of the output images
pub const DEFAULT_OUT_SIZE: u32 = 64;

/// Default margin added by [`Padding::PerImage`]
pub const DEFAULT_MARGIN: u32 = 6;

/// How the side of the padded square is chosen
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Padding {
    /// The larger dimension of each image plus a margin
    PerImage {
        /// Pixels added to the larger dimension
        margin: u32,
    },
    /// The largest dimension of all images of the font
    ///
    /// Keeps the relative size of the glyphs intact.
    Global,
}

impl Default for Padding {
    fn default() -> Self {
        Padding::PerImage {
            margin: DEFAULT_MARGIN,
        }
    }
}

impl Padding {
    /// Side of the square for an image of `width` x `height`
    ///
    /// `global` is the largest dimension of all images, only used for
    /// [`Padding::Global`].
    pub fn side(&self, width: u32, height: u32, global: u32) -> u32 {
        match self {
            Padding::PerImage { margin } => width.max(height) + margin,
            Padding::Global => global,
        }
    }
}

/// How the normalized samples are named
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum NameScheme {
    /// `A.png` to `Z.png`, then `a.png` to `z.png`
    ///
    /// On a case-insensitive file system upper and lower case names collide.
    #[default]
    Letter,
    /// `00.png`, `01.png`, ... like the cropped samples
    Index,
}

impl NameScheme {
    /// File name of the `index`-th sample
    pub fn file_name(&self, index: usize) -> Result<String> {
        match self {
            NameScheme::Letter => letter_name(index)
                .map(|c| format!("{}.png", c))
                .ok_or(Error::NameOverflow(index)),
            NameScheme::Index => Ok(index_name(index)),
        }
    }
}

/// The letter for the `index`-th sample, if there is one
pub fn letter_name(index: usize) -> Option<char> {
    let index = u8::try_from(index).ok()?;
    match index {
        0..=25 => Some(char::from(b'A' + index)),
        26..=51 => Some(char::from(b'a' + index - 26)),
        _ => None,
    }
}

/// Settings for [`normalize_dir`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// How to pad to a square
    pub padding: Padding,
    /// How to name the outputs
    pub naming: NameScheme,
    /// Side length of the outputs
    pub out_size: u32,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            naming: NameScheme::default(),
            out_size: DEFAULT_OUT_SIZE,
        }
    }
}

/// Paste `img` centered onto a white square of the given side
pub fn square(img: &RgbImage, side: u32) -> RgbImage {
    let mut out = RgbImage::from_pixel(side, side, BACKGROUND);
    let x = side.saturating_sub(img.width()) / 2;
    let y = side.saturating_sub(img.height()) / 2;
    imageops::replace(&mut out, img, i64::from(x), i64::from(y));
    out
}

/// Pad `img` to a square of the given side and resize it to `out_size`
pub fn normalize(img: &RgbImage, side: u32, out_size: u32) -> RgbImage {
    let padded = square(img, side);
    imageops::resize(&padded, out_size, out_size, FilterType::Lanczos3)
}

/// Normalize the samples `00.png` to `{count - 1}.png` of `in_dir`
///
/// The results are written to `out_dir`, replacing existing files.
pub fn normalize_dir(
    in_dir: &Path,
    count: usize,
    out_dir: &Path,
    opts: &NormalizeOptions,
) -> Result<()> {
    if let Some(last) = count.checked_sub(1) {
        opts.naming.file_name(last)?;
    }

    let global = match opts.padding {
        Padding::Global => max_dimension(in_dir, count)?,
        Padding::PerImage { .. } => 0,
    };
    debug!("Normalizing {} samples in `{}`", count, in_dir.display());

    for index in 0..count {
        let img = load_rgb(&in_dir.join(index_name(index)))?;
        let side = opts.padding.side(img.width(), img.height(), global);
        let out = normalize(&img, side, opts.out_size);
        save_png(&out, &out_dir.join(opts.naming.file_name(index)?))?;
    }
    Ok(())
}

/// Largest width or height of the first `count` samples in `dir`
fn max_dimension(dir: &Path, count: usize) -> Result<u32> {
    let mut max = 0;
    for index in 0..count {
        let path = dir.join(index_name(index));
        let (width, height) = image::image_dimensions(&path).map_err(Error::image(&path))?;
        max = max.max(width).max(height);
    }
    Ok(max)
}
