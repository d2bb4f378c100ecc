//! Per-window sampling state driven once per frame by the UI loop.

use crate::debounce::Debouncer;
use crate::info::{describe, ColorFormat, ColorInfo};
use crate::sampler::{CursorSource, PixelSampler, Point};
use crate::Rgb;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Whether the readout follows the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SamplingMode {
    #[default]
    Sampling,
    Paused,
}

impl SamplingMode {
    pub fn toggled(self) -> Self {
        match self {
            SamplingMode::Sampling => SamplingMode::Paused,
            SamplingMode::Paused => SamplingMode::Sampling,
        }
    }
}

/// Everything the render loop needs between frames.
#[derive(Debug, Clone)]
pub struct AppState {
    mode: SamplingMode,
    cursor: Point,
    color: Rgb,
    info: ColorInfo,
    always_on_top: bool,
    copy_debounce: Debouncer,
}

impl AppState {
    pub fn new(always_on_top: bool, copy_debounce: Duration) -> Self {
        Self {
            mode: SamplingMode::Sampling,
            cursor: Point::default(),
            color: Rgb::BLACK,
            info: describe(Rgb::BLACK),
            always_on_top,
            copy_debounce: Debouncer::new(copy_debounce),
        }
    }

    pub fn mode(&self) -> SamplingMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.mode == SamplingMode::Paused
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn info(&self) -> &ColorInfo {
        &self.info
    }

    pub fn always_on_top(&self) -> bool {
        self.always_on_top
    }

    pub fn toggle_pause(&mut self) -> SamplingMode {
        self.mode = self.mode.toggled();
        debug!(mode = ?self.mode, "Sampling mode toggled");
        self.mode
    }

    pub fn toggle_always_on_top(&mut self) -> bool {
        self.always_on_top = !self.always_on_top;
        self.always_on_top
    }

    /// Sample the pixel under the cursor unless paused.
    ///
    /// Returns `true` when a new sample was taken. If the cursor position is
    /// unavailable the previous position is sampled again.
    pub fn tick<C, S>(&mut self, cursor: &C, sampler: &S) -> bool
    where
        C: CursorSource + ?Sized,
        S: PixelSampler + ?Sized,
    {
        if self.is_paused() {
            return false;
        }

        match cursor.cursor_position() {
            Some(position) => self.cursor = position,
            None => trace!(cursor = ?self.cursor, "Cursor position unavailable, reusing last"),
        }

        let color = sampler.read_pixel(self.cursor.x, self.cursor.y);
        if color != self.color {
            trace!(%color, x = self.cursor.x, y = self.cursor.y, "Sampled new color");
        }
        self.color = color;
        self.info = describe(color);
        true
    }

    /// Text to place on the clipboard for `format`, or `None` if a copy
    /// happened too recently.
    pub fn copy_request(&mut self, format: ColorFormat, now: Instant) -> Option<String> {
        if !self.copy_debounce.try_fire(now) {
            trace!(?format, "Copy suppressed by debounce");
            return None;
        }
        let text = self.info.value(format).to_string();
        debug!(?format, %text, "Copying value");
        Some(text)
    }
}
