//! CLI command implementations

pub mod add;
pub mod convert;
pub mod info;
pub mod new;
pub mod remove;
pub mod render;

use anyhow::{Context, Result};
use std::path::Path;
use swatch_core::PaletteStore;
use swatch_io::PaletteFormat;

/// Load a palette file into a fresh store.
pub fn load_palette(path: &Path, format: Option<PaletteFormat>) -> Result<(PaletteFormat, PaletteStore)> {
    let (format, items) = swatch_io::read_palette(path, format)
        .with_context(|| format!("Failed to load: {}", path.display()))?;
    Ok((format, PaletteStore::from_items(items)))
}

/// Save a store's index-sorted snapshot to a palette file.
pub fn save_palette(path: &Path, store: &PaletteStore, format: PaletteFormat) -> Result<()> {
    swatch_io::write_palette(path, &store.snapshot_sorted_by_index(), format)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Output format: explicit flag, then extension, then JSON.
pub fn output_format(path: &Path, explicit: Option<PaletteFormat>) -> PaletteFormat {
    explicit
        .or_else(|| PaletteFormat::from_extension(path))
        .unwrap_or_default()
}
