use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::{Error, Result};

/// File name of the `index`-th cropped sample, e.g. `07.png`
pub fn index_name(index: usize) -> String {
    format!("{:02}.png", index)
}

pub(crate) fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(Error::image(path))?;
    Ok(img.into_rgb8())
}

pub(crate) fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(Error::image(path))
}
