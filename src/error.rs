// One error type for the whole library.
// Every variant states *where* things went wrong.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::PixelMode;

#[derive(Error, Debug)]
pub enum Error {
    /// The font file could not be opened or read.
    #[error("Font read error: {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bytes were read but are not a font we can parse.
    #[error("Font format error: {0}")]
    FontFormat(String),

    /// Requested point size or resolution is unusable.
    #[error("Char size error: {0}")]
    CharSize(String),

    /// The glyph source could not produce a bitmap for a glyph index.
    #[error("Glyph render error: {0}")]
    GlyphRender(String),

    #[error("Unsupported pixel mode: {0:?}")]
    UnsupportedPixelMode(PixelMode),

    /// Declared width/pitch/rows do not match the buffer.
    #[error("Bitmap layout error: {0}")]
    BitmapLayout(String),

    #[error("Canvas error: {0}")]
    Canvas(String),

    /// Encoding or writing the PNG failed.
    #[error("Export error: {0}")]
    Export(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Creating or updating the preview window failed.
    #[error("Window error: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, Error>;
