//! Render one line of text onto an RGB canvas and export it as PNG.
//!
//! A [`GlyphSource`] turns character codes into coverage bitmaps, [`draw_text`]
//! blends them onto a [`Canvas`] while a [`Cursor`] walks along the line, and
//! [`write_png`] saves the result.

pub mod builtin;
pub mod canvas;
pub mod config;
pub mod cursor;
pub mod draw;
pub mod error;
pub mod export;
pub mod font;
#[cfg(feature = "preview")]
pub mod preview;
pub mod source;
pub mod types;

pub use builtin::BuiltinFont;
pub use canvas::{Background, Canvas, Rgb};
pub use cursor::Cursor;
pub use draw::{RenderReport, SkipReason, TextStyle, blend_glyph, draw_text};
pub use error::{Error, Result};
pub use export::write_png;
pub use font::FontFace;
pub use source::{CharSize, FaceInfo, GlyphIndex, GlyphSource};
pub use types::{GlyphBitmap, GlyphMetrics, PixelMode, RenderedGlyph};
