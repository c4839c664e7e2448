// Writes the finished canvas out as an 8-bit RGB PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::info;

use crate::canvas::Canvas;
use crate::error::{Error, Result};

/// Encode `canvas` as PNG into any writer.
pub fn encode_png<W: Write>(canvas: &Canvas, writer: W) -> Result<()> {
    let width = u32::try_from(canvas.width())
        .map_err(|_| Error::Canvas(format!("width {} too large for PNG", canvas.width())))?;
    let height = u32::try_from(canvas.height())
        .map_err(|_| Error::Canvas(format!("height {} too large for PNG", canvas.height())))?;

    // Rows are packed, so the encoder can take the buffer as is.
    debug_assert_eq!(canvas.as_raw().len(), canvas.stride() * canvas.height());
    PngEncoder::new(writer).write_image(canvas.as_raw(), width, height, ExtendedColorType::Rgb8)?;
    Ok(())
}

/// Create (or truncate) `path` and write the canvas to it.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    encode_png(canvas, &mut out)?;
    out.flush()?;
    info!(path = %path.display(), width = canvas.width(), height = canvas.height(), "png written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Background, Rgb};

    #[test]
    fn png_round_trip_is_byte_exact() {
        let mut canvas = Canvas::with_background(37, 21, Background::Gradient).unwrap();
        canvas.blend_pixel(3, 4, Rgb([12, 200, 7]), 0.4);
        canvas.set_pixel(36, 20, Rgb([1, 2, 3]));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_png(&canvas, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (37, 21));
        assert_eq!(decoded.as_raw().as_slice(), canvas.as_raw());
    }

    #[test]
    fn encodes_into_memory() {
        let canvas = Canvas::with_background(2, 2, Background::Solid(Rgb::WHITE)).unwrap();
        let mut buf = Vec::new();
        encode_png(&canvas, &mut buf).unwrap();
        assert_eq!(&buf[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&buf).unwrap().to_rgb8();
        assert_eq!(decoded.as_raw().as_slice(), canvas.as_raw());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let canvas = Canvas::new(1, 1).unwrap();
        let err = write_png(&canvas, Path::new("/nonexistent-dir/out.png")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
