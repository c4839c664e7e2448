//! End-to-end: built-in font -> canvas -> PNG on disk -> decoded again.

use glyph_canvas::{
    Background, BuiltinFont, Canvas, CharSize, Cursor, GlyphSource, Rgb, SkipReason, TextStyle,
    draw_text, write_png,
};
use tempfile::TempDir;

fn render(text: &str, background: Background) -> (Canvas, glyph_canvas::RenderReport) {
    let mut font = BuiltinFont::new();
    font.set_char_size(CharSize::new(14.0, 72).unwrap()).unwrap(); // scale 2
    let mut canvas = Canvas::with_background(120, 40, background).unwrap();
    let mut cursor = Cursor::new(4, 0);
    let codes: Vec<u32> = text.bytes().map(u32::from).collect();
    let style = TextStyle {
        baseline: 20,
        foreground: Rgb::WHITE,
    };
    let report = draw_text(&mut canvas, &font, &mut cursor, &codes, &style);
    (canvas, report)
}

#[test]
fn builtin_text_is_drawn_and_exported() {
    let (canvas, report) = render("HI 42", Background::Solid(Rgb::BLACK));

    assert_eq!(report.drawn, 5);
    assert!(report.skipped.is_empty());
    assert_eq!(report.clipped_pixels, 0);
    // 5 glyphs * (5 + 1) font pixels * scale 2
    assert_eq!(report.cursor, (4 + 5 * 12, 0));

    // 'H' left stem: glyph top is baseline - 14 = 6, pen x = 4
    assert_eq!(canvas.pixel(4, 6), Some(Rgb::WHITE));
    assert_eq!(canvas.pixel(5, 19), Some(Rgb::WHITE));
    // above the glyph box
    assert_eq!(canvas.pixel(4, 5), Some(Rgb::BLACK));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hi.png");
    write_png(&canvas, &path).unwrap();
    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.as_raw().as_slice(), canvas.as_raw());
}

#[test]
fn lowercase_is_skipped_without_advancing() {
    let (_, with_gap) = render("AbC", Background::Gradient);
    let (_, without) = render("AC", Background::Gradient);

    assert_eq!(with_gap.drawn, 2);
    assert_eq!(with_gap.skipped.len(), 1);
    assert_eq!(with_gap.skipped[0].code, 'b' as u32);
    assert_eq!(with_gap.skipped[0].reason, SkipReason::MissingGlyph);
    assert_eq!(with_gap.cursor, without.cursor);
}

#[test]
fn empty_text_exports_the_background() {
    let (canvas, report) = render("", Background::Gradient);
    let blank = Canvas::with_background(120, 40, Background::Gradient).unwrap();
    assert_eq!(report.drawn, 0);
    assert_eq!(canvas, blank);
}

#[test]
fn text_running_off_the_right_edge_is_clipped() {
    let (canvas, report) = render("MMMMMMMMMMMM", Background::Solid(Rgb::BLACK));
    assert_eq!(report.drawn, 12);
    assert!(report.clipped_pixels > 0);
    assert_eq!(canvas.width(), 120);
}
