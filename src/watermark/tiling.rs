//! Grid geometry for repeating the watermark text across a canvas.
//!
//! Columns start one step left of the canvas so rotated tiles still cover
//! the left edge. Rows start at the top edge. Both run one step past the far
//! edge.

use crate::watermark::model::WatermarkParameters;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub origin: (i32, i32),
    pub angle_degrees: i32,
}

impl Tile {
    /// Map a point in the tile's rotated frame onto the canvas.
    pub fn to_canvas(&self, local: (f32, f32)) -> (f32, f32) {
        let (sin, cos) = (self.angle_degrees as f32).to_radians().sin_cos();
        let x = local.0 * cos - local.1 * sin;
        let y = local.0 * sin + local.1 * cos;
        (self.origin.0 as f32 + x, self.origin.1 as f32 + y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    step_x: f32,
    step_y: f32,
    grid_x: i32,
    grid_y: i32,
    width: i32,
    height: i32,
    angle_degrees: i32,
}

impl TileLayout {
    pub fn new(parameters: &WatermarkParameters, width: i32, height: i32) -> Self {
        let font_size = parameters.font_size as f32;
        let spacing = parameters.spacing as f32;
        let step_x = font_size * parameters.text_len() as f32 * 0.5 + spacing;
        let step_y = font_size * 2.0 + spacing;
        Self {
            step_x,
            step_y,
            grid_x: (step_x as i32).max(1),
            grid_y: (step_y as i32).max(1),
            width,
            height,
            angle_degrees: parameters.angle,
        }
    }

    pub fn step_x(&self) -> f32 {
        self.step_x
    }

    pub fn step_y(&self) -> f32 {
        self.step_y
    }

    /// Size of the text rectangle anchored at each tile origin.
    pub fn local_size(&self) -> (f32, f32) {
        (self.step_x * 2.0, self.step_y * 2.0)
    }

    pub fn columns(&self) -> impl Iterator<Item = i32> + Clone {
        let end = self.width + self.grid_x;
        (-self.grid_x..end).step_by(self.grid_x as usize)
    }

    pub fn rows(&self) -> impl Iterator<Item = i32> + Clone {
        let end = self.height + self.grid_y;
        (0..end).step_by(self.grid_y as usize)
    }

    pub fn tile_count(&self) -> usize {
        self.columns().count() * self.rows().count()
    }

    /// Tiles in column-major order, matching the paint order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let angle_degrees = self.angle_degrees;
        self.columns().flat_map(move |x| {
            self.rows().map(move |y| Tile {
                origin: (x, y),
                angle_degrees,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::TileLayout;
    use crate::watermark::model::{WatermarkColor, WatermarkParameters};

    fn params(text: &str, font_size: u32, spacing: u32) -> WatermarkParameters {
        WatermarkParameters {
            text: text.to_string(),
            font_size,
            color: WatermarkColor::rgb(0, 0, 0),
            opacity: 0.15,
            angle: -30,
            spacing,
        }
    }

    #[test]
    fn fractional_step_is_truncated_for_grid_but_kept_for_rect() {
        let layout = TileLayout::new(&params("A", 15, 0), 100, 100);
        assert_eq!(layout.step_x(), 7.5);
        let cols: Vec<i32> = layout.columns().take(3).collect();
        assert_eq!(cols, vec![-7, 0, 7]);
        assert_eq!(layout.local_size().0, 15.0);
    }

    #[test]
    fn empty_canvas_still_has_edge_tiles() {
        let layout = TileLayout::new(&params("TEST", 30, 150), 0, 0);
        assert_eq!(layout.columns().collect::<Vec<_>>(), vec![-210, 0]);
        assert_eq!(layout.rows().collect::<Vec<_>>(), vec![0]);
        assert_eq!(layout.tile_count(), 2);
    }
}
