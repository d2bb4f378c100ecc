//! Seams to the OS: where the cursor is and what color is under it.
//!
//! Implementations live in `colorex-platform`; tests use in-memory fakes.

use crate::Rgb;
use serde::{Deserialize, Serialize};

/// Screen position in the coordinate space the cursor source reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Reads the color of a single screen pixel.
pub trait PixelSampler {
    /// Color at `(x, y)`. Implementations return black when the pixel
    /// cannot be read.
    fn read_pixel(&self, x: i32, y: i32) -> Rgb;
}

/// Reports the global cursor position.
pub trait CursorSource {
    fn cursor_position(&self) -> Option<Point>;
}

impl<T: PixelSampler + ?Sized> PixelSampler for Box<T> {
    fn read_pixel(&self, x: i32, y: i32) -> Rgb {
        (**self).read_pixel(x, y)
    }
}

impl<T: CursorSource + ?Sized> CursorSource for Box<T> {
    fn cursor_position(&self) -> Option<Point> {
        (**self).cursor_position()
    }
}
