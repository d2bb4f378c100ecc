use eframe::egui::Color32;

pub const WINDOW_TITLE: &str = "colorex";
pub const WINDOW_WIDTH: f32 = 315.0;
pub const WINDOW_HEIGHT: f32 = 240.0;
pub const WINDOW_PADDING: f32 = 10.0;

pub const SWATCH_WIDTH: f32 = 70.0;
pub const SWATCH_HEIGHT: f32 = 40.0;
pub const SWATCH_SHADOW_OFFSET: f32 = 2.0;

pub const ROW_WIDTH: f32 = 290.0;
pub const ROW_HEIGHT: f32 = 25.0;
pub const ROW_LABEL_WIDTH: f32 = 60.0;
pub const ROW_TEXT_INSET: f32 = 8.0;
pub const ROWS_TOP_GAP: f32 = 15.0;

pub const LABEL_FONT_SIZE: f32 = 14.0;
pub const VALUE_FONT_SIZE: f32 = 13.0;

pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 250);
pub const ROW_BORDER: Color32 = Color32::from_rgb(242, 242, 242);
pub const ROW_HOVER: Color32 = Color32::from_rgb(230, 230, 255);
pub const SWATCH_SHADOW: Color32 = Color32::from_rgb(230, 230, 230);
pub const LABEL_COLOR: Color32 = Color32::from_rgb(51, 51, 51);
pub const VALUE_COLOR: Color32 = Color32::from_rgb(26, 51, 128);
pub const PAUSED_COLOR: Color32 = Color32::from_rgb(160, 90, 30);
