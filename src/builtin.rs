// Built-in 5x7 bitmap font, so text can be drawn without any font file.
// Covers digits, uppercase ASCII and a little punctuation; everything else
// reports a missing glyph. Glyphs come out as 1-bit mono bitmaps.

use crate::error::{Error, Result};
use crate::source::{CharSize, FaceInfo, GlyphIndex, GlyphSource};
use crate::types::{GlyphBitmap, GlyphMetrics, PixelMode, RenderedGlyph};

const CELL_W: usize = 5;
const CELL_H: usize = 7;

/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
const GLYPHS: &[(char, [u8; 7])] = &[
    // Digits 0..9
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    // Uppercase A..Z
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
    ('H', [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('I', [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('J', [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
    ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
    ('X', [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
    ('Y', [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
    // Punctuation
    (' ', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('|', [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    (':', [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000]),
    ('.', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000]),
    (',', [0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00100, 0b01000]),
    ('!', [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100]),
    ('?', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100]),
    ('-', [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
];

/// The 5x7 font as a glyph source. Each font pixel becomes a `scale` x `scale` block.
pub struct BuiltinFont {
    info: FaceInfo,
    scale: usize,
}

impl Default for BuiltinFont {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinFont {
    pub fn new() -> Self {
        Self {
            info: FaceInfo {
                family_name: Some("Builtin 5x7".into()),
                style_name: Some("Regular".into()),
                num_glyphs: GLYPHS.len() + 1,
                num_charmaps: 1,
                num_faces: 1,
                num_fixed_sizes: 1,
                units_per_em: CELL_H as u16,
            },
            scale: 1,
        }
    }

    pub fn scale(&self) -> usize {
        self.scale
    }
}

impl GlyphSource for BuiltinFont {
    fn face_info(&self) -> &FaceInfo {
        &self.info
    }

    /// Picks the integer scale whose cell height is closest to the em size.
    fn set_char_size(&mut self, size: CharSize) -> Result<()> {
        let size = CharSize::new(size.points, size.dpi)?;
        self.scale = ((size.pixels() / CELL_H as f32).round() as usize).max(1);
        Ok(())
    }

    fn glyph_index(&self, code: u32) -> Option<GlyphIndex> {
        let ch = char::from_u32(code)?;
        GLYPHS
            .iter()
            .position(|(c, _)| *c == ch)
            .map(|i| GlyphIndex(i as u16 + 1))
    }

    fn render_glyph(&self, index: GlyphIndex) -> Result<RenderedGlyph> {
        let rows = (index.0 as usize)
            .checked_sub(1)
            .and_then(|i| GLYPHS.get(i))
            .map(|(_, rows)| rows)
            .ok_or_else(|| Error::GlyphRender(format!("no builtin glyph {}", index.0)))?;

        let s = self.scale;
        let width = CELL_W * s;
        let height = CELL_H * s;
        let pitch = width.div_ceil(8);
        let mut buffer = vec![0u8; pitch * height];

        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..CELL_W {
                if (rowbits & (1 << (4 - rx))) == 0 {
                    continue;
                }
                // Fill the scale x scale block for this font pixel
                for dy in 0..s {
                    let line = &mut buffer[(ry * s + dy) * pitch..][..pitch];
                    for dx in 0..s {
                        let col = rx * s + dx;
                        line[col / 8] |= 0x80 >> (col % 8);
                    }
                }
            }
        }

        let px = |v: usize| (v * 64) as i32;
        Ok(RenderedGlyph {
            bitmap: GlyphBitmap {
                width,
                rows: height,
                pitch: pitch as i32,
                mode: PixelMode::Mono,
                buffer,
            },
            metrics: GlyphMetrics {
                width: px(width),
                height: px(height),
                hori_bearing_x: 0,
                hori_bearing_y: px(height),
                // 5 pixels glyph width + 1 pixel spacing
                hori_advance: px((CELL_W + 1) * s),
            },
        })
    }
}
