// The seam between the compositor and whatever turns characters into bitmaps.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::RenderedGlyph;

/// Index of a glyph inside a face. Never 0: the missing glyph is reported as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphIndex(pub u16);

/// Requested size in points at a device resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharSize {
    pub points: f32,
    pub dpi: u32,
}

impl Default for CharSize {
    fn default() -> Self {
        Self {
            points: 48.0,
            dpi: 72,
        }
    }
}

impl CharSize {
    pub fn new(points: f32, dpi: u32) -> Result<Self> {
        if !(points.is_finite() && points > 0.0) {
            return Err(Error::CharSize(format!("point size must be positive, got {points}")));
        }
        if dpi == 0 {
            return Err(Error::CharSize("dpi must be positive".into()));
        }
        Ok(Self { points, dpi })
    }

    /// Em size in pixels: points * dpi / 72.
    pub fn pixels(&self) -> f32 {
        self.points * self.dpi as f32 / 72.0
    }
}

/// Face-level metadata, reported once before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceInfo {
    pub family_name: Option<String>,
    pub style_name: Option<String>,
    pub num_glyphs: usize,
    pub num_charmaps: usize,
    pub num_faces: usize,
    pub num_fixed_sizes: usize,
    pub units_per_em: u16,
}

impl fmt::Display for FaceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |n: &Option<String>| n.clone().unwrap_or_else(|| "(none)".into());
        writeln!(f, "family_name: {}", name(&self.family_name))?;
        writeln!(f, "style_name: {}", name(&self.style_name))?;
        writeln!(f, "num_glyphs: {}", self.num_glyphs)?;
        writeln!(f, "num_charmaps: {}", self.num_charmaps)?;
        writeln!(f, "num_faces: {}", self.num_faces)?;
        writeln!(f, "num_fixed_sizes: {}", self.num_fixed_sizes)?;
        write!(f, "units_per_em: {}", self.units_per_em)
    }
}

/// Produces coverage bitmaps and metrics for character codes.
pub trait GlyphSource {
    fn face_info(&self) -> &FaceInfo;

    /// Size used by every following `render_glyph` call.
    fn set_char_size(&mut self, size: CharSize) -> Result<()>;

    /// Map a character code to a glyph, or None if the face has no glyph for it.
    fn glyph_index(&self, code: u32) -> Option<GlyphIndex>;

    /// Rasterize one glyph at the current size.
    fn render_glyph(&self, index: GlyphIndex) -> Result<RenderedGlyph>;
}
