use egui::{Color32, ColorImage, Painter, Stroke, TextureHandle, TextureOptions, pos2};

use crate::color::Color;
use crate::grid::Grid;
use crate::input::CanvasMapper;

const CHECKER_LIGHT: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
const CHECKER_DARK: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);
const GRID_LINE: Color32 = Color32::from_rgba_premultiplied(30, 30, 30, 77);
/// Grid lines are only drawn when cells are at least this many screen pixels wide
const MIN_GRID_ZOOM: f32 = 4.0;

/// Build a one-texel-per-cell image of `grid` for display.
///
/// Transparent cells show `background`, or a two-tone checkerboard when the
/// background is transparent too.
pub fn grid_color_image(grid: &Grid, background: Color) -> ColorImage {
    let mut image = ColorImage::new([grid.width(), grid.height()], Color32::TRANSPARENT);
    for (y, row) in grid.rows().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            let shown = match (cell, background) {
                (Color::Transparent, Color::Transparent) if (x + y) % 2 == 0 => CHECKER_LIGHT,
                (Color::Transparent, Color::Transparent) => CHECKER_DARK,
                (Color::Transparent, background) => background.into(),
                (painted, _) => painted.into(),
            };
            image.pixels[y * grid.width() + x] = shown;
        }
    }
    image
}

/// Paints the canvas into an egui painter
pub struct CanvasRenderer {
    ctx: egui::Context,
    texture: Option<TextureHandle>,
    /// Grid and background the texture was last built from
    uploaded: Option<(Grid, Color)>,
}

impl std::fmt::Debug for CanvasRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasRenderer")
            .field("has_texture", &self.texture.is_some())
            .finish()
    }
}

impl CanvasRenderer {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            ctx: ctx.clone(),
            texture: None,
            uploaded: None,
        }
    }

    /// Renders the grid
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     mapper (CanvasMapper): Screen placement and zoom of the canvas
    ///     grid (Grid): The grid to show, preview or committed
    ///     background (Color): Fill for transparent cells
    ///     show_grid (bool): Whether to draw cell separators
    pub fn render(
        &mut self,
        painter: &Painter,
        mapper: &CanvasMapper,
        grid: &Grid,
        background: Color,
        show_grid: bool,
    ) {
        let texture_id = self.upload(grid, background);
        let uv = egui::Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        painter.image(texture_id, mapper.rect, uv, Color32::WHITE);

        if show_grid && mapper.zoom >= MIN_GRID_ZOOM {
            let stroke = Stroke::new(1.0, GRID_LINE);
            let rect = mapper.rect;
            for x in 0..=grid.width() {
                let sx = rect.min.x + x as f32 * mapper.zoom;
                painter.line_segment([pos2(sx, rect.min.y), pos2(sx, rect.max.y)], stroke);
            }
            for y in 0..=grid.height() {
                let sy = rect.min.y + y as f32 * mapper.zoom;
                painter.line_segment([pos2(rect.min.x, sy), pos2(rect.max.x, sy)], stroke);
            }
        }
    }

    /// Upload the grid as a texture unless it is unchanged since the last frame
    fn upload(&mut self, grid: &Grid, background: Color) -> egui::TextureId {
        let unchanged = self
            .uploaded
            .as_ref()
            .is_some_and(|(g, b)| g == grid && *b == background);

        match &mut self.texture {
            Some(texture) if unchanged => texture.id(),
            Some(texture) => {
                texture.set(grid_color_image(grid, background), TextureOptions::NEAREST);
                self.uploaded = Some((grid.clone(), background));
                texture.id()
            }
            None => {
                let texture = self.ctx.load_texture(
                    "pixel-canvas",
                    grid_color_image(grid, background),
                    TextureOptions::NEAREST,
                );
                let id = texture.id();
                self.texture = Some(texture);
                self.uploaded = Some((grid.clone(), background));
                id
            }
        }
    }
}
