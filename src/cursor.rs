// Pen position for laying out one line of glyphs.

/// Drawing origin on the canvas, in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    x: i32,
    y: i32,
}

impl Cursor {
    /// Pen at (`x`, `y`).
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move the pen right by `delta_x` (left if negative). `y` never changes.
    pub fn advance(&mut self, delta_x: i32) {
        self.x += delta_x;
    }

    /// Current (x, y).
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
