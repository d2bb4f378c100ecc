//! macOS implementation of pixel color detection.

use colorex_core::Rgb;
use core_graphics::display::CGDisplay;
use core_graphics::geometry::{CGPoint, CGRect, CGSize};
use core_graphics::window::{
    kCGNullWindowID, kCGWindowImageDefault, kCGWindowListOptionOnScreenOnly,
};

/// Capture a 1x1 region of the composited screen at the given point.
pub fn get_pixel_color(x: i32, y: i32) -> Option<Rgb> {
    let bounds = CGRect::new(&CGPoint::new(x as f64, y as f64), &CGSize::new(1.0, 1.0));
    let image = CGDisplay::screenshot(
        bounds,
        kCGWindowListOptionOnScreenOnly,
        kCGNullWindowID,
        kCGWindowImageDefault,
    )?;

    if image.bits_per_pixel() != 32 {
        return None;
    }

    let data = image.data();
    let bytes = data.bytes();
    if bytes.len() < 4 {
        return None;
    }

    // Screen captures are 32-bit little-endian ARGB, i.e. BGRA in memory.
    Some(Rgb::new(bytes[2], bytes[1], bytes[0]))
}
