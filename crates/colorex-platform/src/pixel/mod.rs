//! Pixel color reading at screen coordinates.
//!
//! Platform implementations:
//! - Windows: GDI `GetPixel` with a 1x1 `BitBlt` fallback (`windows.rs`)
//! - macOS: Core Graphics 1x1 display capture (`macos.rs`)
//! - elsewhere: unsupported, reads as black

use crate::dpi::to_capture_coords;
use colorex_core::{PixelSampler, Rgb};
use tracing::trace;

#[cfg(windows)]
mod windows;

#[cfg(target_os = "macos")]
mod macos;

/// Get the color of a pixel at the given screen coordinates.
///
/// Coordinates are in cursor space; DPI mapping happens here.
pub fn get_pixel_color(x: i32, y: i32) -> Option<Rgb> {
    let (px, py) = to_capture_coords(x, y);

    #[cfg(windows)]
    {
        windows::get_pixel_color(px, py)
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_pixel_color(px, py)
    }
    #[cfg(not(any(windows, target_os = "macos")))]
    {
        let _ = (px, py);
        None
    }
}

/// [`PixelSampler`] for the current platform. Unreadable pixels are black.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScreenSampler;

impl ScreenSampler {
    pub fn new() -> Self {
        Self
    }
}

impl PixelSampler for ScreenSampler {
    fn read_pixel(&self, x: i32, y: i32) -> Rgb {
        get_pixel_color(x, y).unwrap_or_else(|| {
            trace!(x, y, "pixel read failed, using black");
            Rgb::BLACK
        })
    }
}
