//! DPI scaling utilities for high-resolution display support.
//!
//! The cursor source may report logical coordinates while screen capture
//! works in physical pixels. Once the process is DPI aware both agree;
//! otherwise coordinates are scaled by the factor of the monitor under
//! the point before capture.
//!
//! Platform implementations:
//! - Windows: Per-Monitor V2 DPI awareness and per-monitor DPI (`windows.rs`)
//! - macOS: Relies on system-handled Retina display support (`macos.rs`)

#[cfg(windows)]
mod windows;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(windows)]
pub use windows::{is_dpi_aware, scale_factor_at, set_dpi_aware};

#[cfg(target_os = "macos")]
pub use macos::{is_dpi_aware, scale_factor_at, set_dpi_aware};

#[cfg(not(any(windows, target_os = "macos")))]
mod fallback {
    /// Set DPI awareness (no-op on unsupported platforms).
    pub fn set_dpi_aware() {}

    pub fn is_dpi_aware() -> bool {
        true
    }

    pub fn scale_factor_at(_x: i32, _y: i32) -> f64 {
        1.0
    }
}

#[cfg(not(any(windows, target_os = "macos")))]
pub use fallback::{is_dpi_aware, scale_factor_at, set_dpi_aware};

/// Coordinates that can be converted between physical and logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledCoords {
    /// X coordinate in logical pixels.
    pub logical_x: i32,
    /// Y coordinate in logical pixels.
    pub logical_y: i32,
    /// The scale factor used for conversion.
    pub scale_factor: f64,
}

impl ScaledCoords {
    pub fn new(logical_x: i32, logical_y: i32, scale_factor: f64) -> Self {
        // A zero or negative factor would collapse every point onto the origin.
        let scale_factor = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self {
            logical_x,
            logical_y,
            scale_factor,
        }
    }

    /// Create scaled coordinates using the factor of the monitor at the point.
    pub fn from_logical(x: i32, y: i32) -> Self {
        Self::new(x, y, scale_factor_at(x, y))
    }

    /// Convert to physical pixels.
    pub fn to_physical(&self) -> (i32, i32) {
        (
            (self.logical_x as f64 * self.scale_factor).round() as i32,
            (self.logical_y as f64 * self.scale_factor).round() as i32,
        )
    }
}

/// Map cursor coordinates to the coordinates screen capture expects.
pub fn to_capture_coords(x: i32, y: i32) -> (i32, i32) {
    if is_dpi_aware() {
        (x, y)
    } else {
        ScaledCoords::from_logical(x, y).to_physical()
    }
}
