//! Palette rasterizer.
//!
//! Draws an index-sorted palette snapshot as a grid of labeled swatches
//! and encodes it to PNG. The rasterizer owns its font system and glyph
//! cache; output depends only on the items, the config and the fonts
//! that font system can see.
//!
//! # Pipeline
//!
//! 1. Scale swatch size, gaps, font size and padding by `config.scale`
//! 2. Lay the grid out with [`GridLayout`]
//! 3. Allocate a [`Surface`] of exactly the canvas size
//! 4. Per item: fill the cell, pick a contrast color, draw the clipped label
//! 5. Encode to PNG, either blocking or through an [`EncodeJob`]

use cosmic_text::{FontSystem, SwashCache};
use swatch_core::{contrast_text, hex_to_rgb, GridLayout, PaletteItem};
use tracing::{debug, info, trace};

use crate::text::{draw_label, Label};
use crate::{EncodeJob, RenderConfig, RenderResult, Surface};

/// Draws palettes to PNG.
pub struct Rasterizer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer").finish_non_exhaustive()
    }
}

impl Rasterizer {
    /// Creates a rasterizer using the system's fonts.
    pub fn new() -> Self {
        Self::with_font_system(FontSystem::new())
    }

    /// Creates a rasterizer around a caller-supplied font system.
    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self {
            font_system,
            swash_cache: SwashCache::new(),
        }
    }

    /// Draws `items` in sequence order onto a new surface.
    ///
    /// `items` must already be sorted by index. The config is clamped to
    /// its documented ranges before use.
    pub fn draw(&mut self, items: &[PaletteItem], config: &RenderConfig) -> RenderResult<Surface> {
        let config = config.clamped();
        let geometry = config.scaled();
        let grid = GridLayout::compute(
            items.len(),
            geometry.row_len,
            geometry.swatch_width,
            geometry.swatch_height,
            geometry.gap_h,
            geometry.gap_v,
        );
        trace!(
            count = items.len(),
            cols = grid.cols,
            rows = grid.rows,
            width = grid.canvas_width,
            height = grid.canvas_height,
            "Rasterizer::draw"
        );

        let mut surface = Surface::new(grid.canvas_width, grid.canvas_height)?;
        let font_size = geometry.label_font_size() as f32;

        for (i, item) in items.iter().enumerate() {
            let cell = grid.cell(i);
            let [r, g, b] = hex_to_rgb(&item.hex);
            // Cells always lie inside the canvas, which fits in u32
            surface.fill_rect(cell.x as u32, cell.y as u32, cell.width, cell.height, [r, g, b, 255]);

            let label = Label {
                text: &item.name,
                font_face: &config.font_face,
                font_size,
                color: hex_to_rgb(contrast_text(&item.hex)),
                padding: geometry.padding,
            };
            draw_label(
                &mut self.font_system,
                &mut self.swash_cache,
                &mut surface,
                &cell,
                &label,
            );
        }

        debug!(width = surface.width(), height = surface.height(), "Palette drawn");
        Ok(surface)
    }

    /// Draws synchronously, then hands the surface to a PNG encode worker.
    pub fn render_deferred(
        &mut self,
        items: &[PaletteItem],
        config: &RenderConfig,
    ) -> RenderResult<EncodeJob> {
        let surface = self.draw(items, config)?;
        EncodeJob::spawn(surface)
    }

    /// Draws and encodes, blocking until the PNG bytes are ready.
    pub fn render(&mut self, items: &[PaletteItem], config: &RenderConfig) -> RenderResult<Vec<u8>> {
        let bytes = self.render_deferred(items, config)?.wait()?;
        info!(count = items.len(), bytes = bytes.len(), "Rendered palette");
        Ok(bytes)
    }
}
