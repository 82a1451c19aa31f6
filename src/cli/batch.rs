use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{self, eyre, WrapErr};
use glyphs::{
    charset::Charset,
    font::{discover_fonts, font_name, GlyphFont},
    normalize::normalize_dir,
    sample::render_samples,
};
use log::{error, info, warn};

use super::opt::Options;

/// The folder for the normalized samples, `<sample_dir>_post`
pub fn post_dir(sample_dir: &Path) -> PathBuf {
    let mut name = OsString::from(sample_dir.as_os_str());
    name.push("_post");
    PathBuf::from(name)
}

/// Render and normalize the samples of every font
///
/// A font that fails is reported and skipped; the run fails at the end if
/// there were any such fonts.
pub fn run(opt: Options) -> eyre::Result<()> {
    let charset = Charset::load(&opt.charset, &opt.charset_file)
        .wrap_err_with(|| format!("Failed to load charset `{}`", opt.charset))?;
    let charset = match opt.shuffle {
        0 => charset,
        _ => charset.shuffled_with_seed(opt.seed),
    };
    info!("Charset `{}`: {} characters", opt.charset, charset.len());

    let max_samples = charset.len().min(opt.sample_count);
    if let Some(last) = max_samples.checked_sub(1) {
        opt.normalize_options()
            .naming
            .file_name(last)
            .wrap_err_with(|| {
                format!(
                    "{} samples do not fit `--naming {}`, use `--naming index` or a lower `--sample_count`",
                    max_samples, opt.naming
                )
            })?;
    }

    let fonts = match &opt.src_font {
        Some(font) => vec![font.clone()],
        None => discover_fonts(&opt.fonts_root).wrap_err_with(|| {
            format!("Failed to search fonts in `{}`", opt.fonts_root.display())
        })?,
    };
    if fonts.is_empty() {
        warn!("No `*.ttf` fonts in `{}`", opt.fonts_root.display());
        return Ok(());
    }

    let post_root = post_dir(&opt.sample_dir);
    let mut failed = 0;
    for (idx, font) in fonts.iter().enumerate() {
        if (idx + 1) % 100 == 0 {
            info!("{} fonts", idx + 1);
        }
        if let Err(e) = process_font(font, &charset, &opt, &post_root) {
            error!("Failed to process font `{}`: {:#}", font.display(), e);
            failed += 1;
        }
    }

    match failed {
        0 => Ok(()),
        _ => Err(eyre!("{} of {} fonts failed", failed, fonts.len())),
    }
}

fn process_font(
    path: &Path,
    charset: &Charset,
    opt: &Options,
    post_root: &Path,
) -> eyre::Result<()> {
    let name = font_name(path);
    info!("Processing font `{}`", name);

    let font = GlyphFont::load(path, opt.char_size as f32)?;

    let out_dir = opt.sample_dir.join(&name);
    std::fs::create_dir_all(&out_dir)
        .wrap_err_with(|| format!("Failed to create `{}`", out_dir.display()))?;
    let count = render_samples(&font, charset, &opt.render_options(), &out_dir)?;
    info!("Rendered {} samples to `{}`", count, out_dir.display());

    let post_dir = post_root.join(&name);
    std::fs::create_dir_all(&post_dir)
        .wrap_err_with(|| format!("Failed to create `{}`", post_dir.display()))?;
    normalize_dir(&out_dir, count, &post_dir, &opt.normalize_options())?;
    Ok(())
}
