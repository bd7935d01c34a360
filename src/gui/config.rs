use eframe::egui::Color32;
use std::ops::RangeInclusive;

pub struct Config;

impl Config {
    pub const GRID_SIZE_RANGE: RangeInclusive<usize> = 1..=300;
    pub const TICK_INTERVAL_RANGE_MS: RangeInclusive<u64> = 10..=1000;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const GAP_ABOVE_STATS: f32 = 30.;
}
