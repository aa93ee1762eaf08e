use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WatermarkColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl WatermarkColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_rgb_array(color: [u8; 3]) -> Self {
        Self::rgb(color[0], color[1], color[2])
    }

    /// `#rrggbb`, lower case.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// HSL lightness on the 0..=255 scale.
    pub fn lightness(self) -> u8 {
        let max = self.r.max(self.g).max(self.b) as u16;
        let min = self.r.min(self.g).min(self.b) as u16;
        ((max + min) / 2) as u8
    }

    /// Label color that stays readable on top of this color.
    pub fn preview_text_color(self) -> Self {
        if self.lightness() < 128 {
            Self::rgb(255, 255, 255)
        } else {
            Self::rgb(0, 0, 0)
        }
    }
}

/// Everything one overlay instance needs to paint itself.
///
/// A fresh value is built on every apply and moved into the overlay it
/// configures.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkParameters {
    pub text: String,
    pub font_size: u32,
    pub color: WatermarkColor,
    /// Fraction in `0.0..=1.0`.
    pub opacity: f64,
    /// Degrees, clockwise on screen.
    pub angle: i32,
    pub spacing: u32,
}

impl WatermarkParameters {
    pub fn alpha(&self) -> u8 {
        (255.0 * self.opacity.clamp(0.0, 1.0)).round() as u8
    }

    /// Number of characters, which is what the tile width is derived from.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

pub fn opacity_from_percent(percent: u8) -> f64 {
    f64::from(percent) / 100.0
}

#[cfg(test)]
mod tests {
    use super::{opacity_from_percent, WatermarkColor, WatermarkParameters};

    fn params(text: &str, opacity: f64) -> WatermarkParameters {
        WatermarkParameters {
            text: text.to_string(),
            font_size: 30,
            color: WatermarkColor::rgb(128, 128, 128),
            opacity,
            angle: -30,
            spacing: 150,
        }
    }

    #[test]
    fn fifteen_percent_opacity_maps_to_alpha_38() {
        let p = params("TEST", opacity_from_percent(15));
        assert_eq!(p.alpha(), 38);
    }

    #[test]
    fn full_and_minimum_opacity_alpha() {
        assert_eq!(params("x", opacity_from_percent(100)).alpha(), 255);
        assert_eq!(params("x", opacity_from_percent(1)).alpha(), 3);
    }

    #[test]
    fn text_len_counts_characters_not_bytes() {
        let p = params("内部资料", 0.5);
        assert_eq!(p.text_len(), 4);
    }

    #[test]
    fn hex_name_is_lower_case() {
        assert_eq!(WatermarkColor::rgb(255, 0, 171).to_hex(), "#ff00ab");
    }

    #[test]
    fn preview_text_contrasts_with_swatch() {
        assert_eq!(
            WatermarkColor::rgb(20, 20, 60).preview_text_color(),
            WatermarkColor::rgb(255, 255, 255)
        );
        assert_eq!(
            WatermarkColor::rgb(128, 128, 128).preview_text_color(),
            WatermarkColor::rgb(0, 0, 0)
        );
        assert_eq!(
            WatermarkColor::rgb(255, 255, 0).preview_text_color(),
            WatermarkColor::rgb(255, 255, 255)
        );
    }
}
