// Optional window that shows the rendered canvas (feature "preview").
// The window stays open until it is closed or ESC is pressed.

use minifb::{Key, Window, WindowOptions};

use crate::canvas::Canvas;
use crate::error::{Error, Result};

pub struct Drawer {
    window: Window,
}

impl Drawer {
    /// Create a window sized to the canvas.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::Window(e.to_string()))?;
        window.set_target_fps(30);
        Ok(Self { window })
    }

    /// Push the canvas to the screen.
    pub fn present(&mut self, pixels: &[u32], width: usize, height: usize) -> Result<()> {
        self.window
            .update_with_buffer(pixels, width, height)
            .map_err(|e| Error::Window(e.to_string()))
    }

    /// False once the user closes the window or presses ESC.
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }
}

/// Pack RGB bytes as 0x00RRGGBB, the layout minifb expects.
pub fn pack_rgb(canvas: &Canvas) -> Vec<u32> {
    canvas
        .as_raw()
        .chunks_exact(3)
        .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32)
        .collect()
}

/// Block until the window is dismissed.
pub fn show(canvas: &Canvas, title: &str) -> Result<()> {
    let pixels = pack_rgb(canvas);
    let mut drawer = Drawer::new(title, canvas.width(), canvas.height())?;
    while drawer.is_open() {
        drawer.present(&pixels, canvas.width(), canvas.height())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Background, Rgb};

    #[test]
    fn packs_as_0rgb() {
        let canvas = Canvas::with_background(2, 1, Background::Solid(Rgb([0x12, 0x34, 0x56]))).unwrap();
        assert_eq!(pack_rgb(&canvas), vec![0x0012_3456, 0x0012_3456]);
    }
}
