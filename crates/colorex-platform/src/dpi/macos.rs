//! macOS DPI handling implementation.
//!
//! The cursor location and display capture both use points, so no manual
//! scaling is required.

/// Set DPI awareness (no-op on macOS).
pub fn set_dpi_aware() {}

pub fn is_dpi_aware() -> bool {
    true
}

/// Point-to-point scale; capture rects are expressed in points as well.
pub fn scale_factor_at(_x: i32, _y: i32) -> f64 {
    1.0
}
