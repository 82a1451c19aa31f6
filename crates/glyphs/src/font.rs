//! # Font handles
//!
//! A [`GlyphFont`] binds a parsed TrueType/OpenType font to the pixel size
//! all characters are drawn at.

use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings, Metrics};
use log::debug;
use walkdir::WalkDir;

use crate::{Error, Result};

/// A font at a fixed size
pub struct GlyphFont {
    font: Font,
    size: f32,
}

impl GlyphFont {
    /// Read and parse the font file at `path`
    pub fn load(path: &Path, size: f32) -> Result<Self> {
        let data = std::fs::read(path).map_err(Error::io(path))?;
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|reason| {
            Error::Font {
                path: path.to_owned(),
                reason,
            }
        })?;
        debug!(
            "Loaded font `{}` ({} glyphs)",
            font.name().unwrap_or("<unnamed>"),
            font.glyph_count()
        );
        Ok(Self { font, size })
    }

    /// The pixel size
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Distance from the top of a line to the baseline
    pub fn ascent(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.size)
            .map_or(self.size, |m| m.ascent)
    }

    /// Distance from the baseline to the bottom of a line (negative)
    pub fn descent(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.size)
            .map_or(0.0, |m| m.descent)
    }

    /// Size of the box the text `ch` occupies when drawn
    ///
    /// The width is the advance of the glyph, the height that of a full
    /// line, so that characters of one font share a baseline.
    pub fn text_extent(&self, ch: char) -> (u32, u32) {
        let metrics = self.font.metrics(ch, self.size);
        let width = metrics.advance_width.round().max(0.0) as u32;
        let height = (self.ascent() - self.descent()).round().max(0.0) as u32;
        (width, height)
    }

    /// Coverage bitmap of the glyph for `ch`, one byte per pixel
    ///
    /// Characters without a glyph produce whatever the font draws for its
    /// missing glyph.
    pub fn rasterize(&self, ch: char) -> (Metrics, Vec<u8>) {
        self.font.rasterize(ch, self.size)
    }
}

/// The name used for the output directories of a font
///
/// This is the file name up to the first `.`. Names starting with a `.`
/// use the file stem instead, so that they never end up empty.
pub fn font_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    match file_name.split('.').next() {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Find all `*.ttf` files directly in `root`
///
/// Subdirectories are not searched. The result is sorted by file name.
pub fn discover_fonts(root: &Path) -> Result<Vec<PathBuf>> {
    let mut fonts = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| Error::Io {
            path: root.to_owned(),
            source: e.into(),
        })?;
        let path = entry.path();
        let is_ttf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf"));
        if is_ttf && path.is_file() {
            fonts.push(path.to_owned());
        }
    }
    Ok(fonts)
}
