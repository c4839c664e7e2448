// The RGB raster we composite glyphs onto.
// Pixels are stored row-major, 3 bytes each, rows tightly packed.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const CHANNELS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Rgb {
    type Err = String;

    /// Accepts `#rrggbb` or `rrggbb`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected #rrggbb, got {s:?}"));
        }
        let mut out = [0u8; 3];
        for (i, c) in out.iter_mut().enumerate() {
            *c = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|e| format!("bad color {s:?}: {e}"))?;
        }
        Ok(Rgb(out))
    }
}

/// What the canvas looks like before any glyph is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    /// Red follows the column, green follows the row, blue stays at 255.
    #[default]
    Gradient,
    Solid(Rgb),
}

impl FromStr for Background {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("gradient") {
            Ok(Background::Gradient)
        } else {
            s.parse().map(Background::Solid)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Allocate a black canvas. Zero-sized canvases are rejected.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Canvas(format!("invalid size {width}x{height}")));
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| Error::Canvas(format!("size {width}x{height} overflows")))?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Convenience: allocate and fill in one step.
    pub fn with_background(width: usize, height: usize, background: Background) -> Result<Self> {
        let mut canvas = Self::new(width, height)?;
        canvas.fill(background);
        Ok(canvas)
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width * CHANNELS
    }

    /// Raw row-major RGB bytes, exactly what gets exported.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Overwrite every pixel with the background pattern.
    pub fn fill(&mut self, background: Background) {
        let wmax = (self.width - 1).max(1);
        let hmax = (self.height - 1).max(1);
        let stride = self.stride();
        for (y, row) in self.pixels.chunks_exact_mut(stride).enumerate() {
            for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
                let color = match background {
                    Background::Solid(c) => c.0,
                    Background::Gradient => [
                        (x * 255 / wmax) as u8,
                        (y * 255 / hmax) as u8,
                        255,
                    ],
                };
                px.copy_from_slice(&color);
            }
        }
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.stride() + x * CHANNELS)
    }

    /// Color at (x, y), or None outside the canvas.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb> {
        let i = self.index(x, y)?;
        Some(Rgb([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]))
    }

    /// Set (x, y). Returns false (and writes nothing) when out of bounds.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgb) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i..i + CHANNELS].copy_from_slice(&color.0);
                true
            }
            None => false,
        }
    }

    /// "Over" blend an opaque color with coverage `alpha` in [0, 1].
    /// Returns false (and writes nothing) when out of bounds.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgb, alpha: f32) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        let a = alpha.clamp(0.0, 1.0);
        let inv = 1.0 - a;
        for (dst, src) in self.pixels[i..i + CHANNELS].iter_mut().zip(color.0) {
            let v = *dst as f32 * inv + src as f32 * a;
            *dst = v.round().clamp(0.0, 255.0) as u8;
        }
        true
    }

    /// Blend a premultiplied (r, g, b, a) pixel.
    pub fn blend_premultiplied(&mut self, x: i64, y: i64, rgba: [u8; 4]) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        let inv = 1.0 - rgba[3] as f32 / 255.0;
        for (dst, src) in self.pixels[i..i + CHANNELS].iter_mut().zip(&rgba[..3]) {
            let v = *src as f32 + *dst as f32 * inv;
            *dst = v.round().clamp(0.0, 255.0) as u8;
        }
        true
    }
}
