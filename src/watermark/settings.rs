use serde::{Deserialize, Serialize};

use crate::watermark::model::{opacity_from_percent, WatermarkColor, WatermarkParameters};

pub const MIN_FONT_SIZE: u32 = 10;
pub const MAX_FONT_SIZE: u32 = 200;
pub const MIN_OPACITY_PERCENT: u8 = 1;
pub const MAX_OPACITY_PERCENT: u8 = 100;
pub const MIN_ANGLE: i32 = -90;
pub const MAX_ANGLE: i32 = 90;
pub const MIN_SPACING: u32 = 0;
pub const MAX_SPACING: u32 = 1000;

const DEFAULT_TEXT: &str = "INTERNAL - DO NOT DISTRIBUTE";
const DEFAULT_COLOR: WatermarkColor = WatermarkColor::rgb(128, 128, 128);

/// Values held by the settings panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatermarkSettings {
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default = "default_opacity_percent")]
    pub opacity_percent: u8,
    #[serde(default = "default_angle")]
    pub angle: i32,
    #[serde(default = "default_spacing")]
    pub spacing: u32,
    #[serde(default = "default_color")]
    pub color: WatermarkColor,
    #[serde(default = "default_live_preview")]
    pub live_preview: bool,
}

fn default_text() -> String {
    DEFAULT_TEXT.to_string()
}

fn default_font_size() -> u32 {
    30
}

fn default_opacity_percent() -> u8 {
    15
}

fn default_angle() -> i32 {
    -30
}

fn default_spacing() -> u32 {
    150
}

fn default_color() -> WatermarkColor {
    DEFAULT_COLOR
}

fn default_live_preview() -> bool {
    true
}

impl Default for WatermarkSettings {
    fn default() -> Self {
        Self {
            text: default_text(),
            font_size: default_font_size(),
            opacity_percent: default_opacity_percent(),
            angle: default_angle(),
            spacing: default_spacing(),
            color: default_color(),
            live_preview: default_live_preview(),
        }
    }
}

impl WatermarkSettings {
    /// Clamp every numeric field into its range. Returns whether anything
    /// changed.
    pub fn sanitize(&mut self) -> bool {
        let before = self.clone();
        self.font_size = clamp_font_size(self.font_size);
        self.opacity_percent = clamp_opacity_percent(self.opacity_percent);
        self.angle = clamp_angle(self.angle);
        self.spacing = clamp_spacing(self.spacing);
        *self != before
    }

    pub fn parameters(&self) -> WatermarkParameters {
        WatermarkParameters {
            text: self.text.clone(),
            font_size: self.font_size,
            color: self.color,
            opacity: opacity_from_percent(self.opacity_percent),
            angle: self.angle,
            spacing: self.spacing,
        }
    }
}

pub fn clamp_font_size(value: u32) -> u32 {
    value.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

pub fn clamp_opacity_percent(value: u8) -> u8 {
    value.clamp(MIN_OPACITY_PERCENT, MAX_OPACITY_PERCENT)
}

pub fn clamp_angle(value: i32) -> i32 {
    value.clamp(MIN_ANGLE, MAX_ANGLE)
}

pub fn clamp_spacing(value: u32) -> u32 {
    value.clamp(MIN_SPACING, MAX_SPACING)
}
