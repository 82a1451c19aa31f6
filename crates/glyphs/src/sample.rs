//! # Rendering the samples of one font

use std::path::Path;

use log::{info, warn};

use crate::{
    charset::Charset,
    crop::crop,
    files::{index_name, save_png},
    font::GlyphFont,
    render::{draw_example, Offset},
    Error, Result,
};

/// Default canvas size, before the margin is added
pub const DEFAULT_CANVAS_SIZE: u32 = 256;

/// Default cap on the number of samples per font
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Settings for [`render_samples`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Canvas size, see [`draw_example`]
    pub canvas_size: u32,
    /// Shift of the draw position
    pub offset: Offset,
    /// Stop after this many samples
    pub sample_count: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            offset: Offset::default(),
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

/// Draw and crop the characters of `charset` in order
///
/// The crops are written to `out_dir` as `00.png`, `01.png`, ... and the
/// number of written samples is returned. Characters without ink are
/// skipped and do not use up an index.
pub fn render_samples(
    font: &GlyphFont,
    charset: &Charset,
    opts: &RenderOptions,
    out_dir: &Path,
) -> Result<usize> {
    let mut count = 0;
    for ch in charset.iter() {
        if count == opts.sample_count {
            break;
        }
        let example = draw_example(ch, font, opts.canvas_size, opts.offset);
        let glyph = match crop(&example) {
            Ok(glyph) => glyph,
            Err(Error::EmptyGlyph) => {
                warn!("Skipping {:?} (U+{:04X}): no ink", ch, u32::from(ch));
                continue;
            }
            Err(e) => return Err(e),
        };
        save_png(&glyph, &out_dir.join(index_name(count)))?;
        count += 1;
        if count % 100 == 0 {
            info!("processed {} chars", count);
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::{render_samples, RenderOptions};
    use crate::{charset::Charset, crop::bounding_box};

    #[test]
    fn test_skip_blank_and_cap() {
        let Some(font) = crate::test_font() else {
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let charset = Charset::from_line("A BCD").unwrap();
        let opts = RenderOptions {
            canvas_size: 64,
            sample_count: 3,
            ..RenderOptions::default()
        };

        let count = render_samples(&font, &charset, &opts, dir.path()).unwrap();
        assert_eq!(count, 3);
        for name in ["00.png", "01.png", "02.png"] {
            let img = image::open(dir.path().join(name)).unwrap().into_rgb8();
            // crops are tight
            let bbox = bounding_box(&img).unwrap();
            assert_eq!((bbox.width(), bbox.height()), img.dimensions());
        }
        assert!(!dir.path().join("03.png").exists());
    }

    #[test]
    fn test_only_blanks() {
        let Some(font) = crate::test_font() else {
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let charset = Charset::from_line("   ").unwrap();
        let count =
            render_samples(&font, &charset, &RenderOptions::default(), dir.path()).unwrap();
        assert_eq!(count, 0);
    }
}
