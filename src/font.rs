// Loads a TrueType/OpenType file and turns characters into gray coverage bitmaps.
// fontdue does the rasterizing; ttf-parser answers the face metadata questions.

use std::fs;
use std::path::Path;

use fontdue::{Font, FontSettings};
use tracing::debug;
use ttf_parser::name_id;

use crate::error::{Error, Result};
use crate::source::{CharSize, FaceInfo, GlyphIndex, GlyphSource};
use crate::types::{GlyphBitmap, GlyphMetrics, RenderedGlyph};

/// A small wrapper around fontdue::Font so the render loop stays clean.
pub struct FontFace {
    font: Font,
    info: FaceInfo,
    px: f32,
}

impl FontFace {
    /// Read and parse face `index` of the font file at `path`.
    pub fn open(path: &Path, index: u32) -> Result<Self> {
        let data = fs::read(path).map_err(|source| Error::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = data.len(), "font file read");
        Self::from_bytes(&data, index)
    }

    pub fn from_bytes(data: &[u8], index: u32) -> Result<Self> {
        let info = face_info(data, index)?;

        let settings = FontSettings {
            collection_index: index,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(data, settings)
            .map_err(|e| Error::FontFormat(format!("face {index}: {e}")))?;

        Ok(Self {
            font,
            info,
            px: CharSize::default().pixels(),
        })
    }
}

/// Collect the metadata ttf-parser can see for face `index`.
fn face_info(data: &[u8], index: u32) -> Result<FaceInfo> {
    let face = ttf_parser::Face::parse(data, index)
        .map_err(|e| Error::FontFormat(format!("face {index}: {e}")))?;

    let find_name = |id: u16| {
        face.names()
            .into_iter()
            .filter(|n| n.name_id == id)
            .find_map(|n| n.to_string())
    };

    let tables = face.tables();
    Ok(FaceInfo {
        family_name: find_name(name_id::FAMILY),
        style_name: find_name(name_id::SUBFAMILY),
        num_glyphs: face.number_of_glyphs() as usize,
        num_charmaps: tables.cmap.as_ref().map_or(0, |c| c.subtables.len() as usize),
        num_faces: ttf_parser::fonts_in_collection(data).map_or(1, |n| n as usize),
        // Only sbix strikes are visible through ttf-parser.
        num_fixed_sizes: tables.sbix.as_ref().map_or(0, |s| s.strikes.len() as usize),
        units_per_em: face.units_per_em(),
    })
}

impl GlyphSource for FontFace {
    fn face_info(&self) -> &FaceInfo {
        &self.info
    }

    fn set_char_size(&mut self, size: CharSize) -> Result<()> {
        let size = CharSize::new(size.points, size.dpi)?;
        self.px = size.pixels();
        debug!(points = size.points, dpi = size.dpi, px = self.px, "char size set");
        Ok(())
    }

    fn glyph_index(&self, code: u32) -> Option<GlyphIndex> {
        let ch = char::from_u32(code)?;
        match self.font.lookup_glyph_index(ch) {
            0 => None,
            i => Some(GlyphIndex(i)),
        }
    }

    fn render_glyph(&self, index: GlyphIndex) -> Result<RenderedGlyph> {
        if index.0 >= self.font.glyph_count() {
            return Err(Error::GlyphRender(format!(
                "glyph {} out of range ({} glyphs)",
                index.0,
                self.font.glyph_count()
            )));
        }
        let (m, coverage) = self.font.rasterize_indexed(index.0, self.px);

        // fontdue: ymin is the bitmap bottom relative to the baseline (y up)
        let top = m.ymin + m.height as i32;
        let metrics = GlyphMetrics {
            width: m.width as i32 * 64,
            height: m.height as i32 * 64,
            hori_bearing_x: m.xmin * 64,
            hori_bearing_y: top * 64,
            hori_advance: (m.advance_width * 64.0).round() as i32,
        };

        Ok(RenderedGlyph {
            bitmap: GlyphBitmap::gray(m.width, m.height, coverage),
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Background, Canvas, Rgb};
    use crate::cursor::Cursor;
    use crate::draw::{SkipReason, TextStyle, draw_text};

    static DEJAVU: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/DejaVuSans.ttf"
    ));

    fn dejavu_48() -> FontFace {
        let mut face = FontFace::from_bytes(DEJAVU, 0).unwrap();
        face.set_char_size(CharSize::new(48.0, 72).unwrap()).unwrap();
        face
    }

    fn render(face: &FontFace, ch: char) -> RenderedGlyph {
        let index = face.glyph_index(ch as u32).unwrap();
        face.render_glyph(index).unwrap()
    }

    #[test]
    fn face_metadata_is_reported() {
        let face = dejavu_48();
        let info = face.face_info();
        assert_eq!(info.family_name.as_deref(), Some("DejaVu Sans"));
        assert_eq!(info.style_name.as_deref(), Some("Book"));
        assert_eq!(info.num_faces, 1);
        assert_eq!(info.units_per_em, 2048);
        assert!(info.num_glyphs > 1000);
        assert!(info.num_charmaps >= 1);
    }

    #[test]
    fn cap_letter_sits_on_the_baseline() {
        let face = dejavu_48();
        let h = render(&face, 'H');
        h.bitmap.validate().unwrap();
        assert!(h.bitmap.rows > 0);
        assert_eq!(h.metrics.bearing_y_px(), h.bitmap.rows as i32);
        assert_eq!(h.metrics.height, h.bitmap.rows as i32 * 64);
        assert_eq!(h.metrics.width, h.bitmap.width as i32 * 64);
    }

    #[test]
    fn descender_hangs_below_the_baseline() {
        let face = dejavu_48();
        let g = render(&face, 'g');
        assert!(g.metrics.bearing_y_px() > 0);
        assert!(g.bitmap.rows as i32 > g.metrics.bearing_y_px());
    }

    #[test]
    fn advance_is_rounded_to_26_6() {
        let face = dejavu_48();
        let index = face.glyph_index('W' as u32).unwrap();
        let glyph = face.render_glyph(index).unwrap();
        let expected = face.font.metrics_indexed(index.0, 48.0).advance_width;
        assert_eq!(glyph.metrics.hori_advance, (expected * 64.0).round() as i32);
        assert!(glyph.metrics.advance_px() > 0);
    }

    #[test]
    fn unmapped_code_has_no_glyph() {
        let face = dejavu_48();
        assert_eq!(face.glyph_index(0x01), None);
        assert_eq!(face.glyph_index(0xD800), None);
        assert!(face.glyph_index('A' as u32).is_some());
    }

    #[test]
    fn index_past_glyph_count_is_a_render_error() {
        let face = dejavu_48();
        assert!(matches!(
            face.render_glyph(GlyphIndex(u16::MAX)),
            Err(Error::GlyphRender(_))
        ));
    }

    #[test]
    fn text_lands_between_cap_top_and_descender_bottom() {
        let face = dejavu_48();
        let (h, g) = (render(&face, 'H'), render(&face, 'g'));
        let baseline = 60;
        let mut canvas = Canvas::with_background(200, 120, Background::Solid(Rgb::BLACK)).unwrap();
        let mut cursor = Cursor::default();
        let style = TextStyle {
            baseline,
            foreground: Rgb::WHITE,
        };

        let report = draw_text(&mut canvas, &face, &mut cursor, &[0x48, 0x01, 0x67], &style);
        assert_eq!(report.drawn, 2);
        assert_eq!(report.skipped[0].reason, SkipReason::MissingGlyph);
        assert_eq!(
            cursor.position().0,
            h.metrics.advance_px() + g.metrics.advance_px()
        );

        let lit: Vec<i64> = (0..120)
            .filter(|&y| (0..200).any(|x| canvas.pixel(x, y) != Some(Rgb::BLACK)))
            .collect();
        let top = (baseline - h.metrics.bearing_y_px()) as i64;
        let bottom = (baseline - g.metrics.bearing_y_px() + g.bitmap.rows as i32 - 1) as i64;
        assert_eq!(lit.first(), Some(&top));
        assert_eq!(lit.last(), Some(&bottom));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = FontFace::open(Path::new("/nonexistent/definitely-not-a-font.ttf"), 0)
            .err()
            .unwrap();
        assert!(matches!(err, Error::FontRead { .. }));
        assert!(err.to_string().contains("definitely-not-a-font.ttf"));
    }

    #[test]
    fn garbage_bytes_are_a_format_error() {
        let err = FontFace::from_bytes(b"this is not a font file at all", 0)
            .err()
            .unwrap();
        assert!(matches!(err, Error::FontFormat(_)));
    }

    #[test]
    fn unreadable_directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            FontFace::open(dir.path(), 0),
            Err(Error::FontRead { .. })
        ));
    }
}
