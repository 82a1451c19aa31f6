//! Errors of the sample pipeline

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
/// Error when building glyph samples
pub enum Error {
    /// Reading a file or directory failed
    #[error("Failed to access `{}`", .path.display())]
    Io {
        /// The file or directory
        path: PathBuf,
        /// The underlying error
        #[source]
        source: io::Error,
    },
    /// The charset resource is not valid
    #[error("Malformed charset resource `{}`", .path.display())]
    Json {
        /// The resource file
        path: PathBuf,
        /// The underlying error
        #[source]
        source: serde_json::Error,
    },
    /// The charset resource has no entry for a charset
    #[error("Charset resource has no key `{0}`")]
    MissingKey(&'static str),
    /// A custom charset file has an empty first line
    #[error("Charset is empty")]
    EmptyCharset,
    /// The font file could not be parsed
    #[error("Failed to load font `{}`: {reason}", .path.display())]
    Font {
        /// The font file
        path: PathBuf,
        /// The message from the font parser
        reason: &'static str,
    },
    /// A rendered character has no pixel with ink
    #[error("Glyph has no ink")]
    EmptyGlyph,
    /// Letter naming only covers `A-Z` and `a-z`
    #[error("No letter name for sample {0}, letter naming is limited to 52 samples")]
    NameOverflow(usize),
    /// Decoding or encoding an image failed
    #[error("Failed to process image `{}`", .path.display())]
    Image {
        /// The image file
        path: PathBuf,
        /// The underlying error
        #[source]
        source: image::ImageError,
    },
}

/// Result with the crate's [`enum@Error`] as the default error type
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }

    pub(crate) fn image(path: impl Into<PathBuf>) -> impl FnOnce(image::ImageError) -> Self {
        let path = path.into();
        move |source| Error::Image { path, source }
    }
}
