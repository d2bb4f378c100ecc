//! colorex-platform: platform-specific I/O boundary for colorex.
//!
//! This crate provides:
//! - Pixel color reading under the cursor ([`ScreenSampler`])
//! - Global cursor position via `enigo` ([`EnigoCursor`])
//! - DPI scaling utilities for high-resolution displays
//! - Native window lookup and topmost control
//! - The startup thread that discovers our window handle
//!
//! ## Module Structure
//!
//! Each functional area is organized as a submodule with platform-specific implementations:
//!
//! - `error` - Common error types
//! - `cursor` - Cursor position (shared implementation using enigo)
//! - `dpi` - DPI scaling utilities
//! - `pixel` - Pixel color reading
//! - `window` - Window lookup and z-order
//! - `topmost` - Startup window-handle discovery

mod cursor;
mod dpi;
mod error;
mod pixel;
mod topmost;
mod window;

pub use error::{PlatformError, PlatformResult};

pub use cursor::{EnigoCursor, NoopCursor};

pub use dpi::{is_dpi_aware, scale_factor_at, set_dpi_aware, to_capture_coords, ScaledCoords};

pub use pixel::{get_pixel_color, ScreenSampler};

pub use window::{find_window_by_title, set_topmost, TOPMOST_SUPPORTED};

pub use topmost::{
    spawn_topmost_finder, spawn_topmost_finder_with, TopmostEvent, TopmostFinderConfig,
    TopmostFinderHandle,
};
