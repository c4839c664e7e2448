// Core glyph types passed from a glyph source to the compositor.
// Metric values follow the 26.6 fixed-point convention (1/64 pixel).

use crate::error::{Error, Result};

/// How the bytes of a [`GlyphBitmap`] encode coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelMode {
    None,
    /// 1 bit per pixel, most significant bit is the leftmost pixel.
    Mono,
    /// 8 bits per pixel, 0 = empty, 255 = fully covered.
    Gray,
    /// 2 bits per pixel, packed MSB first.
    Gray2,
    /// 4 bits per pixel, packed MSB first.
    Gray4,
    /// Horizontal subpixel coverage, three bytes per pixel.
    Lcd,
    /// Vertical subpixel coverage, three rows per pixel row.
    LcdV,
    /// Premultiplied blue, green, red, alpha.
    Bgra,
}

impl PixelMode {
    /// Bits used by one pixel, or None for modes the compositor can't read.
    pub fn bits_per_pixel(self) -> Option<usize> {
        match self {
            PixelMode::Mono => Some(1),
            PixelMode::Gray2 => Some(2),
            PixelMode::Gray4 => Some(4),
            PixelMode::Gray => Some(8),
            PixelMode::Bgra => Some(32),
            PixelMode::None | PixelMode::Lcd | PixelMode::LcdV => None,
        }
    }
}

/// Coverage bitmap for a single glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    pub width: usize,
    pub rows: usize,
    /// Bytes per row. Negative when rows are stored bottom-up.
    pub pitch: i32,
    pub mode: PixelMode,
    pub buffer: Vec<u8>,
}

impl GlyphBitmap {
    /// Tightly packed 8-bit gray bitmap (pitch == width).
    pub fn gray(width: usize, rows: usize, buffer: Vec<u8>) -> Self {
        Self {
            width,
            rows,
            pitch: width as i32,
            mode: PixelMode::Gray,
            buffer,
        }
    }

    /// Check that the declared layout is readable from `buffer`.
    pub fn validate(&self) -> Result<()> {
        let bpp = self
            .mode
            .bits_per_pixel()
            .ok_or(Error::UnsupportedPixelMode(self.mode))?;

        let min_pitch = self
            .width
            .checked_mul(bpp)
            .ok_or_else(|| Error::BitmapLayout(format!("width {} overflows", self.width)))?
            .div_ceil(8);
        let pitch = self.pitch.unsigned_abs() as usize;
        if pitch < min_pitch {
            return Err(Error::BitmapLayout(format!(
                "pitch {} too small for {} pixels of {:?}",
                self.pitch, self.width, self.mode
            )));
        }
        let needed = pitch.checked_mul(self.rows).ok_or_else(|| {
            Error::BitmapLayout(format!("{} rows of pitch {} overflow", self.rows, self.pitch))
        })?;
        if self.buffer.len() < needed {
            return Err(Error::BitmapLayout(format!(
                "buffer holds {} bytes, {} rows of pitch {} need {}",
                self.buffer.len(),
                self.rows,
                self.pitch,
                needed
            )));
        }
        Ok(())
    }

    /// Bytes of visual row `row` (0 = top), honoring the pitch sign.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        let pitch = self.pitch.unsigned_abs() as usize;
        let stored = if self.pitch < 0 { self.rows - 1 - row } else { row };
        let start = stored * pitch;
        &self.buffer[start..start + pitch]
    }

    /// Coverage of pixel (row, col) expanded to 0..=255.
    /// For Bgra this is the alpha byte. Call `validate` first.
    #[inline]
    pub fn coverage(&self, row: usize, col: usize) -> u8 {
        let bytes = self.row(row);
        match self.mode {
            PixelMode::Gray => bytes[col],
            PixelMode::Mono => {
                let bit = (bytes[col / 8] >> (7 - col % 8)) & 0x1;
                bit * 255
            }
            PixelMode::Gray2 => {
                let v = (bytes[col / 4] >> (6 - 2 * (col % 4))) & 0x3;
                v * 85
            }
            PixelMode::Gray4 => {
                let v = (bytes[col / 2] >> (4 - 4 * (col % 2))) & 0xF;
                v * 17
            }
            PixelMode::Bgra => bytes[col * 4 + 3],
            PixelMode::None | PixelMode::Lcd | PixelMode::LcdV => 0,
        }
    }

    /// Premultiplied (r, g, b, a) of a Bgra pixel.
    #[inline]
    pub fn bgra(&self, row: usize, col: usize) -> [u8; 4] {
        let px = &self.row(row)[col * 4..col * 4 + 4];
        [px[2], px[1], px[0], px[3]]
    }
}

/// Per-glyph metrics, 26.6 fixed point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub width: i32,
    pub height: i32,
    pub hori_bearing_x: i32,
    /// Distance from the baseline up to the top of the bitmap.
    pub hori_bearing_y: i32,
    pub hori_advance: i32,
}

impl GlyphMetrics {
    /// Advance in whole pixels, truncated toward zero.
    pub fn advance_px(&self) -> i32 {
        self.hori_advance / 64
    }

    /// Vertical bearing in whole pixels, truncated toward zero.
    pub fn bearing_y_px(&self) -> i32 {
        self.hori_bearing_y / 64
    }
}

/// What a glyph source hands over for one character.
#[derive(Debug, Clone)]
pub struct RenderedGlyph {
    pub bitmap: GlyphBitmap,
    pub metrics: GlyphMetrics,
}
