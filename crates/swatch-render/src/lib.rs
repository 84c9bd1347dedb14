//! # swatch-render
//!
//! Renders palettes as PNG swatch sheets.
//!
//! Each item becomes a filled cell in a row-major grid, labeled with its
//! name in near-black or white depending on the cell's luminance.
//!
//! # Usage
//!
//! ```rust,ignore
//! use swatch_core::PaletteStore;
//! use swatch_render::{Rasterizer, RenderConfig};
//!
//! let mut store = PaletteStore::new();
//! store.add_or_update("Sky", 0, "#87CEEB");
//!
//! let config = RenderConfig { row_len: 4, scale: 2, ..Default::default() };
//! let mut rasterizer = Rasterizer::new();
//! let png_bytes = rasterizer.render(&store.snapshot_sorted_by_index(), &config)?;
//! ```
//!
//! # Deferred encoding
//!
//! [`Rasterizer::render_deferred`] draws immediately and returns an
//! [`EncodeJob`]; the PNG bytes arrive through [`EncodeJob::wait`].
//!
//! # Dependencies
//!
//! - [`swatch-core`] - Colors, layout, palette items
//! - [`cosmic_text`] - Label shaping and glyph rasterization
//! - [`png`] - PNG encoding
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `swatch-cli` - `render` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod error;
mod job;
pub mod png;
mod rasterizer;
mod surface;
pub mod text;

pub use config::{
    RenderConfig, ScaledGeometry, FONT_SIZE_RANGE, GAP_RANGE, ROW_LEN_RANGE, SCALE_RANGE,
    SWATCH_RANGE,
};
pub use error::{RenderError, RenderResult};
pub use job::EncodeJob;
pub use rasterizer::Rasterizer;
pub use surface::{Surface, MAX_SURFACE_PIXELS};
