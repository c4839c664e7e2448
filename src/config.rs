// Command-line configuration. Every constant of a render pass can be overridden here.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::canvas::{Background, Rgb};
use crate::draw::TextStyle;
use crate::error::Result;
use crate::source::CharSize;

pub const DEFAULT_FONT: &str = "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf";

/// How the input string is split into character codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TextEncoding {
    /// Every byte is one code. Multi-byte UTF-8 sequences come out as several
    /// Latin-1 codes.
    #[default]
    Bytes,
    /// Every Unicode scalar value is one code.
    Utf8,
}

impl TextEncoding {
    pub fn codes(self, text: &str) -> Vec<u32> {
        match self {
            TextEncoding::Bytes => text.bytes().map(u32::from).collect(),
            TextEncoding::Utf8 => text.chars().map(u32::from).collect(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "glyph-canvas", version, about = "Render a line of text onto an RGB canvas and save it as PNG")]
pub struct Args {
    /// TrueType/OpenType font file
    #[arg(long, default_value = DEFAULT_FONT)]
    pub font: PathBuf,

    /// Face to use inside a font collection
    #[arg(long, default_value_t = 0)]
    pub face_index: u32,

    /// Use the built-in 5x7 bitmap font instead of a font file
    #[arg(long, conflicts_with = "font")]
    pub builtin_font: bool,

    #[arg(long, default_value = "Hello, World!")]
    pub text: String,

    #[arg(long, value_enum, default_value_t = TextEncoding::Bytes)]
    pub encoding: TextEncoding,

    /// Character size in points
    #[arg(long, default_value_t = 48.0)]
    pub size: f32,

    #[arg(long, default_value_t = 72)]
    pub dpi: u32,

    #[arg(long, default_value_t = 1000)]
    pub width: usize,

    #[arg(long, default_value_t = 1000)]
    pub height: usize,

    /// Baseline position in pixels from the top of the canvas
    #[arg(long, default_value_t = 200, allow_negative_numbers = true)]
    pub baseline: i32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub origin_x: i32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub origin_y: i32,

    /// Text color as #rrggbb
    #[arg(long, default_value = "#ffffff")]
    pub foreground: Rgb,

    /// "gradient" or a solid #rrggbb color
    #[arg(long, default_value = "gradient")]
    pub background: Background,

    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Show the result in a window after saving
    #[cfg(feature = "preview")]
    #[arg(long)]
    pub preview: bool,
}

impl Args {
    pub fn char_size(&self) -> Result<CharSize> {
        CharSize::new(self.size, self.dpi)
    }

    pub fn style(&self) -> TextStyle {
        TextStyle {
            baseline: self.baseline,
            foreground: self.foreground,
        }
    }

    pub fn codes(&self) -> Vec<u32> {
        self.encoding.codes(&self.text)
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}
