//! # font2img
//!
//! Render the characters of TrueType fonts to a folder of uniformly
//! sized sample images. See [`glyphs`] for the individual stages.

pub mod cli;
