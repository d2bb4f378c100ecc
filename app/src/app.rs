use crate::constants::*;
use colorex_core::{AppState, ColorFormat, CursorSource, PixelSampler, Rgb, Settings};
use colorex_platform::{set_topmost, TopmostEvent, TopmostFinderHandle, TOPMOST_SUPPORTED};
use eframe::egui::{
    pos2, vec2, Align2, CentralPanel, Color32, Context, FontId, Frame, Key, Rect, Sense, Stroke,
    Ui,
};
use eframe::App as EguiApp;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct App {
    state: AppState,
    cursor: Box<dyn CursorSource>,
    sampler: Box<dyn PixelSampler>,

    pause_key: Key,
    frame_delay: Duration,

    topmost_finder: Option<TopmostFinderHandle>,
    window_handle: Option<usize>,
}

impl App {
    pub fn new(
        settings: &Settings,
        cursor: Box<dyn CursorSource>,
        sampler: Box<dyn PixelSampler>,
        topmost_finder: Option<TopmostFinderHandle>,
    ) -> Self {
        let pause_key = Key::from_name(&settings.pause_key).unwrap_or_else(|| {
            warn!(key = %settings.pause_key, "Unknown pause key, using Space");
            Key::Space
        });

        Self {
            state: AppState::new(settings.always_on_top, settings.click_debounce()),
            cursor,
            sampler,
            pause_key,
            frame_delay: settings.frame_delay(),
            topmost_finder,
            window_handle: None,
        }
    }

    /// Pick up the window handle once the startup finder reports back.
    fn poll_topmost_finder(&mut self) {
        let Some(event) = self.topmost_finder.as_ref().and_then(|f| f.try_recv()) else {
            return;
        };
        self.topmost_finder = None;

        match event {
            TopmostEvent::Found { handle, applied } => {
                self.window_handle = Some(handle);
                // The checkbox may have been toggled while the finder was still running.
                set_topmost(handle, self.state.always_on_top());
                debug!(handle, applied, "Window handle stored");
            }
            TopmostEvent::GaveUp => debug!("Window handle not found, topmost control disabled"),
        }
    }

    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(self.pause_key)) {
            let mode = self.state.toggle_pause();
            info!(?mode, "Pause toggled");
        }
    }

    fn draw_header(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            draw_swatch(ui, self.state.color());
            ui.add_space(WINDOW_PADDING);

            ui.vertical(|ui| {
                if TOPMOST_SUPPORTED {
                    let mut on_top = self.state.always_on_top();
                    if ui.checkbox(&mut on_top, "Always on top").changed() {
                        let on_top = self.state.toggle_always_on_top();
                        match self.window_handle {
                            Some(handle) => {
                                let ok = set_topmost(handle, on_top);
                                debug!(on_top, ok, "Always on top changed");
                            }
                            None => debug!(on_top, "Always on top changed before window was found"),
                        }
                    }
                }

                if self.state.is_paused() {
                    ui.colored_label(
                        PAUSED_COLOR,
                        format!("Paused ({} to resume)", self.pause_key.name()),
                    );
                }
            });
        });
    }

    fn draw_rows(&mut self, ui: &mut Ui) {
        let mut clicked = None;

        ui.spacing_mut().item_spacing.y = 0.0;
        for (format, value) in self.state.info().rows() {
            if value_row(ui, format, value) {
                clicked = Some(format);
            }
        }

        if let Some(format) = clicked {
            if let Some(text) = self.state.copy_request(format, Instant::now()) {
                ui.ctx().copy_text(text);
            }
        }
    }
}

impl EguiApp for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_topmost_finder();
        self.handle_input(ctx);
        self.state.tick(&self.cursor, &self.sampler);

        CentralPanel::default()
            .frame(Frame::none().fill(BACKGROUND).inner_margin(WINDOW_PADDING))
            .show(ctx, |ui| {
                self.draw_header(ui);
                ui.add_space(ROWS_TOP_GAP);
                self.draw_rows(ui);
            });

        ctx.request_repaint_after(self.frame_delay);
    }
}

fn draw_swatch(ui: &mut Ui, color: Rgb) {
    let (rect, _) = ui.allocate_exact_size(vec2(SWATCH_WIDTH, SWATCH_HEIGHT), Sense::hover());
    let painter = ui.painter();

    let shadow = rect.translate(vec2(SWATCH_SHADOW_OFFSET, SWATCH_SHADOW_OFFSET));
    painter.rect_filled(shadow, 0.0, SWATCH_SHADOW);
    painter.rect_filled(rect, 0.0, Color32::from_rgb(color.r, color.g, color.b));
}

/// One label/value row. Returns `true` when the value area was clicked.
fn value_row(ui: &mut Ui, format: ColorFormat, value: &str) -> bool {
    let (rect, response) = ui.allocate_exact_size(vec2(ROW_WIDTH, ROW_HEIGHT), Sense::click());
    let value_rect = Rect::from_min_max(pos2(rect.min.x + ROW_LABEL_WIDTH, rect.min.y), rect.max);
    let painter = ui.painter();

    let over_value = response
        .hover_pos()
        .is_some_and(|pos| value_rect.contains(pos));
    if over_value {
        painter.rect_filled(rect, 0.0, ROW_HOVER);
    }
    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, ROW_BORDER));

    painter.text(
        pos2(rect.min.x + ROW_TEXT_INSET, rect.center().y),
        Align2::LEFT_CENTER,
        format.label(),
        FontId::proportional(LABEL_FONT_SIZE),
        LABEL_COLOR,
    );
    painter.text(
        pos2(value_rect.min.x, rect.center().y),
        Align2::LEFT_CENTER,
        value,
        FontId::proportional(VALUE_FONT_SIZE),
        VALUE_COLOR,
    );

    response.clicked()
        && response
            .interact_pointer_pos()
            .is_some_and(|pos| value_rect.contains(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorex_core::Point;
    use colorex_platform::{spawn_topmost_finder_with, TopmostFinderConfig};
    use std::thread;

    struct FixedCursor;

    impl CursorSource for FixedCursor {
        fn cursor_position(&self) -> Option<Point> {
            Some(Point::new(1, 1))
        }
    }

    struct SolidSampler(Rgb);

    impl PixelSampler for SolidSampler {
        fn read_pixel(&self, _x: i32, _y: i32) -> Rgb {
            self.0
        }
    }

    fn app(settings: &Settings, finder: Option<TopmostFinderHandle>) -> App {
        App::new(
            settings,
            Box::new(FixedCursor),
            Box::new(SolidSampler(Rgb::new(18, 52, 86))),
            finder,
        )
    }

    #[test]
    fn test_pause_key_from_settings() {
        let settings = Settings {
            pause_key: "P".into(),
            ..Settings::default()
        };
        assert_eq!(app(&settings, None).pause_key, Key::P);
    }

    #[test]
    fn test_unknown_pause_key_falls_back_to_space() {
        let settings = Settings {
            pause_key: "NotAKey".into(),
            ..Settings::default()
        };
        assert_eq!(app(&settings, None).pause_key, Key::Space);
    }

    #[test]
    fn test_found_handle_is_stored() {
        let config = TopmostFinderConfig {
            attempts: 1,
            backoff: Duration::from_millis(1),
            ..TopmostFinderConfig::default()
        };
        let finder = spawn_topmost_finder_with(config, |_| Some(9), |_, _| true);
        let mut app = app(&Settings::default(), Some(finder));

        let deadline = Instant::now() + Duration::from_secs(5);
        while app.window_handle.is_none() && Instant::now() < deadline {
            app.poll_topmost_finder();
            thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(app.window_handle, Some(9));
        assert!(app.topmost_finder.is_none());
    }

    #[test]
    fn test_state_follows_sampler() {
        let mut app = app(&Settings::default(), None);
        app.state.tick(&app.cursor, &app.sampler);
        assert_eq!(app.state.info().hex, "#123456");
    }
}
