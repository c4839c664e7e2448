// Compositing glyph coverage bitmaps onto the canvas.
// 1) blend_glyph: one bitmap at one pen position, "over" blended, clipped to the canvas.
// 2) draw_text: the per-character loop (look up, render, blend, advance).

use tracing::{debug, info, warn};

use crate::canvas::{Canvas, Rgb};
use crate::cursor::Cursor;
use crate::error::Result;
use crate::source::GlyphSource;
use crate::types::{PixelMode, RenderedGlyph};

/// How glyphs are placed and colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Vertical position of the baseline, added to the pen's y.
    pub baseline: i32,
    pub foreground: Rgb,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            baseline: 200,
            foreground: Rgb::WHITE,
        }
    }
}

/// Pixel counts for one blended glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlendStats {
    /// Source pixels blended onto the canvas (zero coverage included).
    pub written: usize,
    /// Source pixels that landed outside the canvas.
    pub clipped: usize,
}

/// Why a character produced no mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingGlyph,
    RenderFailed(String),
    Rejected(String),
}

/// A character that left no mark, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedChar {
    /// Position in the input sequence.
    pub position: usize,
    /// Character code as looked up in the glyph source.
    pub code: u32,
    pub reason: SkipReason,
}

/// Outcome of a whole `draw_text` pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Characters whose glyph was blended.
    pub drawn: usize,
    pub skipped: Vec<SkippedChar>,
    pub clipped_pixels: usize,
    /// Pen position after the last character.
    pub cursor: (i32, i32),
}

/// Blend one glyph with its pen position at `origin`.
///
/// Source pixel (i, j) lands on
/// `(origin.x + j, baseline - bearing_y / 64 + origin.y + i)`.
/// Out-of-canvas pixels are dropped and counted; a bitmap whose layout can't be
/// read is rejected before anything is written.
pub fn blend_glyph(
    canvas: &mut Canvas,
    glyph: &RenderedGlyph,
    origin: (i32, i32),
    style: &TextStyle,
) -> Result<BlendStats> {
    let bitmap = &glyph.bitmap;
    bitmap.validate()?;

    let top = style.baseline as i64 - glyph.metrics.bearing_y_px() as i64 + origin.1 as i64;
    let left = origin.0 as i64;

    let mut stats = BlendStats::default();
    for i in 0..bitmap.rows {
        let y = top + i as i64;
        for j in 0..bitmap.width {
            let x = left + j as i64;
            let inside = match bitmap.mode {
                PixelMode::Bgra => canvas.blend_premultiplied(x, y, bitmap.bgra(i, j)),
                _ => {
                    let alpha = bitmap.coverage(i, j) as f32 / 255.0;
                    canvas.blend_pixel(x, y, style.foreground, alpha)
                }
            };
            if inside {
                stats.written += 1;
            } else {
                stats.clipped += 1;
            }
        }
    }
    Ok(stats)
}

/// Draw a sequence of character codes on one line starting at the cursor.
///
/// Characters without a glyph, or whose glyph fails to render or blend, are
/// skipped: nothing is drawn and the cursor does not move for them.
pub fn draw_text<S: GlyphSource + ?Sized>(
    canvas: &mut Canvas,
    source: &S,
    cursor: &mut Cursor,
    codes: &[u32],
    style: &TextStyle,
) -> RenderReport {
    let mut report = RenderReport::default();

    for (position, &code) in codes.iter().enumerate() {
        match draw_char(canvas, source, cursor.position(), code, style) {
            Ok((advance, stats)) => {
                debug!(code, advance, written = stats.written, clipped = stats.clipped, "glyph drawn");
                cursor.advance(advance);
                report.drawn += 1;
                report.clipped_pixels += stats.clipped;
            }
            Err(reason) => {
                warn!(position, code, ?reason, "character skipped");
                report.skipped.push(SkippedChar {
                    position,
                    code,
                    reason,
                });
            }
        }
    }

    report.cursor = cursor.position();
    info!(
        drawn = report.drawn,
        skipped = report.skipped.len(),
        clipped_pixels = report.clipped_pixels,
        "text rendered"
    );
    report
}

/// Returns the advance in whole pixels, or why the character was skipped.
fn draw_char<S: GlyphSource + ?Sized>(
    canvas: &mut Canvas,
    source: &S,
    origin: (i32, i32),
    code: u32,
    style: &TextStyle,
) -> std::result::Result<(i32, BlendStats), SkipReason> {
    let index = source.glyph_index(code).ok_or(SkipReason::MissingGlyph)?;
    let glyph = source
        .render_glyph(index)
        .map_err(|e| SkipReason::RenderFailed(e.to_string()))?;
    let stats = blend_glyph(canvas, &glyph, origin, style)
        .map_err(|e| SkipReason::Rejected(e.to_string()))?;
    Ok((glyph.metrics.advance_px(), stats))
}
