//! # swatch-core
//!
//! Core types for building and laying out named color palettes.
//!
//! # Modules
//!
//! - [`color`] - Hex normalization, sRGB linearization, contrast text
//! - [`layout`] - Swatch grid geometry
//! - [`palette`] - [`PaletteItem`] and the owned [`PaletteStore`]
//!
//! # Usage
//!
//! ```rust
//! use swatch_core::{GridLayout, PaletteStore};
//!
//! let mut store = PaletteStore::new();
//! store.add_or_update("Sky", 0, "#87ceeb");
//! store.add_or_update("Ink", 1, "#1a1a2e");
//!
//! let items = store.snapshot_sorted_by_index();
//! let grid = GridLayout::compute(items.len(), 4, 120, 80, 8, 8);
//! assert_eq!(grid.canvas_width, 4 * 120 + 3 * 8);
//! ```
//!
//! # Dependencies
//!
//! - [`uuid`] - Session identities for palette items
//! - [`tracing`] - Store mutation logging
//!
//! # Used By
//!
//! - `swatch-io` - JSON and GPL codecs
//! - `swatch-render` - PNG rasterizer

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod layout;
pub mod palette;

pub use color::{contrast_text, hex_to_rgb, normalize_hex, relative_luminance, rgb_to_hex};
pub use layout::{Cell, GridLayout};
pub use palette::{slug_of, AddOutcome, ItemId, PaletteItem, PaletteStore, MAX_INDEX};
