use std::{fmt, path::PathBuf, str::FromStr};

use clap::Parser;
use glyphs::{
    charset::{CharsetId, DEFAULT_CHARSET_FILE},
    normalize::{NameScheme, NormalizeOptions, Padding, DEFAULT_MARGIN},
    render::Offset,
    sample::RenderOptions,
};

/// How to pad the cropped glyphs to a square
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum PadMode {
    /// Per image, larger dimension plus a small margin
    #[default]
    PerImage,
    /// Largest dimension of all glyphs of a font
    Global,
}

/// How to name the normalized images
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Naming {
    /// `A.png` ... `Z.png`, `a.png` ... `z.png`
    #[default]
    Letter,
    /// `00.png`, `01.png`, ...
    Index,
}

#[derive(Debug)]
/// Failed to parse an option value
pub struct ChoiceError {
    choices: &'static str,
}

impl fmt::Display for ChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Use one of {}", self.choices)
    }
}

impl std::error::Error for ChoiceError {}

impl FromStr for PadMode {
    type Err = ChoiceError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "per-image" => Ok(Self::PerImage),
            "global" => Ok(Self::Global),
            _ => Err(ChoiceError {
                choices: "`per-image` or `global`",
            }),
        }
    }
}

impl fmt::Display for PadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerImage => f.write_str("per-image"),
            Self::Global => f.write_str("global"),
        }
    }
}

impl FromStr for Naming {
    type Err = ChoiceError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "letter" => Ok(Self::Letter),
            "index" => Ok(Self::Index),
            _ => Err(ChoiceError {
                choices: "`letter` or `index`",
            }),
        }
    }
}

impl fmt::Display for Naming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter => f.write_str("letter"),
            Self::Index => f.write_str("index"),
        }
    }
}

/// Convert the characters of fonts to images
#[derive(Parser, Debug)]
#[clap(name = "font2img", version)]
pub struct Options {
    /// Folder to search for `*.ttf` fonts (not recursive)
    #[clap(long = "fonts_root", default_value = ".")]
    pub fonts_root: PathBuf,

    /// Process only this font instead of searching `fonts_root`
    #[clap(long = "src_font")]
    pub src_font: Option<PathBuf>,

    /// Charset: `EN`, `CN`, `JP`, `KR`, `CN_T` or a one line file
    #[clap(long, default_value = "EN")]
    pub charset: CharsetId,

    /// The JSON file with the built-in charsets
    #[clap(long = "charset_file", default_value = DEFAULT_CHARSET_FILE)]
    pub charset_file: PathBuf,

    /// Shuffle the charset before processing (0 or 1)
    #[clap(long, default_value = "0")]
    pub shuffle: u8,

    /// Seed for `--shuffle`, for a reproducible order
    #[clap(long)]
    pub seed: Option<u64>,

    /// Character size in pixels
    #[clap(long = "char_size", default_value = "230")]
    pub char_size: u32,

    /// Canvas size (300 pixels are added on each axis)
    #[clap(long = "canvas_size", default_value = "256")]
    pub canvas_size: u32,

    /// Horizontal shift of the character on the canvas
    #[clap(long = "x_offset", default_value = "0", allow_negative_numbers = true)]
    pub x_offset: i32,

    /// Vertical shift of the character on the canvas
    #[clap(long = "y_offset", default_value = "0", allow_negative_numbers = true)]
    pub y_offset: i32,

    /// Number of characters to draw per font
    #[clap(long = "sample_count", default_value = "1000")]
    pub sample_count: usize,

    /// Folder to save the samples to
    ///
    /// The normalized samples go to the same path with `_post` appended.
    #[clap(long = "sample_dir", default_value = "images")]
    pub sample_dir: PathBuf,

    /// Side length of the normalized images
    #[clap(long = "out_size", default_value = "64")]
    pub out_size: u32,

    /// How to pad glyphs to a square: `per-image` or `global`
    #[clap(long, default_value_t)]
    pub pad: PadMode,

    /// How to name the normalized images: `letter` or `index`
    #[clap(long, default_value_t)]
    pub naming: Naming,
}

impl Options {
    /// Settings for the render stage
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            canvas_size: self.canvas_size,
            offset: Offset {
                x: self.x_offset,
                y: self.y_offset,
            },
            sample_count: self.sample_count,
        }
    }

    /// Settings for the normalize stage
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            padding: match self.pad {
                PadMode::PerImage => Padding::PerImage {
                    margin: DEFAULT_MARGIN,
                },
                PadMode::Global => Padding::Global,
            },
            naming: match self.naming {
                Naming::Letter => NameScheme::Letter,
                Naming::Index => NameScheme::Index,
            },
            out_size: self.out_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use glyphs::{charset::CharsetId, normalize::Padding};

    use super::{Naming, Options, PadMode};

    #[test]
    fn test_defaults() {
        let opt = Options::try_parse_from(["font2img"]).unwrap();
        assert_eq!(opt.fonts_root, PathBuf::from("."));
        assert_eq!(opt.src_font, None);
        assert_eq!(opt.charset, CharsetId::En);
        assert_eq!(opt.shuffle, 0);
        assert_eq!(opt.char_size, 230);
        assert_eq!(opt.canvas_size, 256);
        assert_eq!((opt.x_offset, opt.y_offset), (0, 0));
        assert_eq!(opt.sample_count, 1000);
        assert_eq!(opt.sample_dir, PathBuf::from("images"));
        assert_eq!(opt.out_size, 64);
        assert_eq!(opt.pad, PadMode::PerImage);
        assert_eq!(opt.naming, Naming::Letter);
        assert_eq!(
            opt.normalize_options().padding,
            Padding::PerImage { margin: 6 }
        );
    }

    #[test]
    fn test_flags() {
        let opt = Options::try_parse_from([
            "font2img",
            "--charset",
            "CN_T",
            "--shuffle",
            "1",
            "--x_offset",
            "-12",
            "--pad",
            "global",
            "--naming",
            "index",
        ])
        .unwrap();
        assert_eq!(opt.charset, CharsetId::CnT);
        assert_eq!(opt.shuffle, 1);
        assert_eq!(opt.render_options().offset.x, -12);
        assert_eq!(opt.normalize_options().padding, Padding::Global);

        let custom = Options::try_parse_from(["font2img", "--charset", "my.txt"]).unwrap();
        assert_eq!(custom.charset, CharsetId::Custom(PathBuf::from("my.txt")));

        assert!(Options::try_parse_from(["font2img", "--pad", "square"]).is_err());
    }
}
