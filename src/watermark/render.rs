use crate::watermark::model::WatermarkParameters;
use crate::watermark::tiling::TileLayout;
use eframe::egui;
use eframe::egui::epaint::TextShape;
use eframe::egui::text::{LayoutJob, TextWrapping};

/// Baseline DPI for converting typographic points to logical pixels.
const BASE_DPI: f32 = 96.0;

pub fn text_color(parameters: &WatermarkParameters) -> egui::Color32 {
    let c = parameters.color;
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, parameters.alpha())
}

/// Font for the tile text. `font_size` is in points, egui sizes are in
/// logical pixels.
pub fn font_id(parameters: &WatermarkParameters) -> egui::FontId {
    egui::FontId::proportional(parameters.font_size as f32 * BASE_DPI / 72.0)
}

/// Single-line layout clipped to the width of a tile's local rectangle.
pub fn tile_text_job(parameters: &WatermarkParameters, max_width: f32) -> LayoutJob {
    let mut job = LayoutJob::simple_singleline(
        parameters.text.clone(),
        font_id(parameters),
        text_color(parameters),
    );
    job.wrap = TextWrapping {
        max_width,
        max_rows: 1,
        break_anywhere: true,
        overflow_character: None,
    };
    job
}

/// Paint one rotated copy of the text per tile of `canvas`.
///
/// Geometry is rebuilt from `parameters` on every call. Returns the number of
/// tiles painted.
pub fn paint_watermark(
    painter: &egui::Painter,
    canvas: egui::Rect,
    parameters: &WatermarkParameters,
) -> usize {
    if !parameters.has_text() {
        return 0;
    }

    let layout = TileLayout::new(
        parameters,
        canvas.width().round() as i32,
        canvas.height().round() as i32,
    );
    let color = text_color(parameters);
    let galley = painter.layout_job(tile_text_job(parameters, layout.local_size().0));
    let angle = (parameters.angle as f32).to_radians();

    let mut painted = 0;
    for tile in layout.tiles() {
        // egui rotates text shapes about `pos`, which is the tile's local origin.
        let (x, y) = tile.to_canvas((0.0, 0.0));
        let mut shape = TextShape::new(canvas.min + egui::vec2(x, y), galley.clone(), color);
        shape.angle = angle;
        painter.add(shape);
        painted += 1;
    }
    painted
}

#[cfg(test)]
mod tests {
    use super::{font_id, text_color, tile_text_job};
    use crate::watermark::model::{WatermarkColor, WatermarkParameters};

    fn parameters() -> WatermarkParameters {
        WatermarkParameters {
            text: "TEST".into(),
            font_size: 30,
            color: WatermarkColor::rgb(10, 20, 30),
            opacity: 0.15,
            angle: 0,
            spacing: 0,
        }
    }

    #[test]
    fn text_color_uses_rounded_alpha() {
        let color = text_color(&parameters());
        assert_eq!(color.a(), 38);
    }

    #[test]
    fn font_size_is_in_points() {
        assert_eq!(font_id(&parameters()).size, 40.0);
    }

    #[test]
    fn tile_text_is_one_clipped_row() {
        let job = tile_text_job(&parameters(), 120.0);
        assert_eq!(job.wrap.max_width, 120.0);
        assert_eq!(job.wrap.max_rows, 1);
        assert!(job.wrap.break_anywhere);
        assert_eq!(job.wrap.overflow_character, None);
        assert_eq!(job.text, "TEST");
    }
}
