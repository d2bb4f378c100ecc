#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod constants;
mod logging;

use app::App;
use colorex_core::config::load_settings;
use colorex_core::{CursorSource, PixelSampler, Settings};
use colorex_platform::{
    set_dpi_aware, spawn_topmost_finder, EnigoCursor, NoopCursor, ScreenSampler,
    TopmostFinderConfig, TopmostFinderHandle,
};
use constants::*;
use eframe::egui::{ViewportBuilder, WindowLevel};
use eframe::{run_native, NativeOptions, Result};
use tracing::{debug, warn};

fn cursor_source() -> Box<dyn CursorSource> {
    match EnigoCursor::new() {
        Ok(cursor) => Box::new(cursor),
        Err(error) => {
            warn!(%error, "Cursor tracking unavailable");
            Box::new(NoopCursor)
        }
    }
}

fn start_topmost_finder(settings: &Settings) -> Option<TopmostFinderHandle> {
    let config = TopmostFinderConfig {
        title: WINDOW_TITLE.to_string(),
        on_top: settings.always_on_top,
        attempts: settings.topmost.attempts,
        backoff: settings.topmost.backoff(),
    };

    match spawn_topmost_finder(config) {
        Ok(handle) => Some(handle),
        Err(error) => {
            debug!(%error, "Topmost control disabled");
            None
        }
    }
}

fn main() -> Result {
    logging::setup(!cfg!(debug_assertions));
    set_dpi_aware();

    let settings = load_settings();

    let mut viewport = ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_resizable(false)
        .with_maximize_button(false);
    if settings.always_on_top {
        viewport = viewport.with_window_level(WindowLevel::AlwaysOnTop);
    }

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| {
            let cursor = cursor_source();
            let sampler: Box<dyn PixelSampler> = Box::new(ScreenSampler::new());
            let finder = start_topmost_finder(&settings);
            Ok(Box::new(App::new(&settings, cursor, sampler, finder)))
        }),
    )
}
