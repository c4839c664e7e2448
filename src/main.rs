// What happens when you run it:
// • The font is loaded and its face metadata is printed.
// • A canvas is filled with the background, the text is blended on one line.
// • The canvas is saved as PNG (and, with the "preview" feature, shown in a window).

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use glyph_canvas::config::Args;
use glyph_canvas::{BuiltinFont, Canvas, Cursor, FontFace, GlyphSource, draw_text, write_png};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(args.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    /* --- Glyph source ---
       Fatal if the font can't be read or parsed. */
    let mut source: Box<dyn GlyphSource> = if args.builtin_font {
        Box::new(BuiltinFont::new())
    } else {
        let face = FontFace::open(&args.font, args.face_index)
            .with_context(|| format!("loading font {}", args.font.display()))?;
        info!(path = %args.font.display(), "font loaded");
        Box::new(face)
    };

    println!("{}", source.face_info());

    source
        .set_char_size(args.char_size()?)
        .context("setting character size")?;

    /* --- Canvas + background --- */
    let mut canvas = Canvas::with_background(args.width, args.height, args.background)
        .context("creating canvas")?;

    /* --- One line of text --- */
    let mut cursor = Cursor::new(args.origin_x, args.origin_y);
    let codes = args.codes();
    let report = draw_text(&mut canvas, &*source, &mut cursor, &codes, &args.style());
    if !report.skipped.is_empty() {
        warn!(
            skipped = report.skipped.len(),
            total = codes.len(),
            "some characters were not drawn"
        );
    }

    /* --- Export --- */
    write_png(&canvas, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    #[cfg(feature = "preview")]
    if args.preview {
        glyph_canvas::preview::show(&canvas, "glyph-canvas")?;
    }

    Ok(())
}
