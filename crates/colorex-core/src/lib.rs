//! colorex-core: color model conversion and sampling state.
//!
//! Design goal: keep this crate UI-agnostic and platform-agnostic.
//! Screen capture, cursor position and window handling live in
//! `colorex-platform`; this crate only sees them through the
//! [`PixelSampler`] and [`CursorSource`] traits.

mod color;
pub mod config;
pub mod convert;
mod debounce;
mod info;
mod sampler;
mod state;

pub use color::Rgb;
pub use config::{ConfigError, ConfigResult, Settings, TopmostSettings};
pub use convert::{to_cmyk, to_hex, to_hsl, to_hsv, Cmyk, Hsl, Hsv};
pub use debounce::Debouncer;
pub use info::{describe, ColorFormat, ColorInfo};
pub use sampler::{CursorSource, PixelSampler, Point};
pub use state::{AppState, SamplingMode};
