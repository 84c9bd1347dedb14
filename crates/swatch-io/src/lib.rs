//! # swatch-io
//!
//! Palette interchange: reading and writing palettes as `palette.v1` JSON
//! or GIMP `.gpl` text.
//!
//! # Supported Formats
//!
//! | Format | Module | Read | Write | Index preserved |
//! |--------|--------|------|-------|-----------------|
//! | palette.v1 JSON | [`json`] | strict envelope, lenient items | pretty-printed | yes |
//! | GIMP palette | [`gpl`] | always lenient | fixed header | no, renumbered |
//!
//! # Usage
//!
//! ```rust,ignore
//! use swatch_core::PaletteStore;
//! use swatch_io::{read_palette, write_palette, PaletteFormat};
//!
//! let (format, items) = read_palette("colors.json", None)?;
//! let mut store = PaletteStore::new();
//! store.replace_all(items);
//! write_palette("colors.gpl", &store.snapshot_sorted_by_index(), PaletteFormat::Gpl)?;
//! ```
//!
//! # Dependencies
//!
//! - [`swatch-core`] - Palette types
//! - [`serde_json`] - JSON documents
//! - [`regex`] - GPL color line matching
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `swatch-cli` - convert, add, remove, render commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod format;
pub mod gpl;
pub mod json;

use std::fs;
use std::path::Path;

use swatch_core::{PaletteItem, PaletteStore};
use tracing::{info, trace};

pub use error::{IoError, IoResult};
pub use format::PaletteFormat;

/// Decodes palette text in the given format.
///
/// GPL decoding never fails; JSON decoding fails on malformed documents.
pub fn decode(text: &str, format: PaletteFormat) -> IoResult<Vec<PaletteItem>> {
    match format {
        PaletteFormat::Json => json::decode(text),
        PaletteFormat::Gpl => Ok(gpl::decode(text)),
    }
}

/// Decodes raw file bytes, validating UTF-8 first.
pub fn decode_bytes(bytes: Vec<u8>, format: PaletteFormat) -> IoResult<Vec<PaletteItem>> {
    let text = String::from_utf8(bytes)?;
    decode(&text, format)
}

/// Encodes an index-sorted snapshot in the given format.
pub fn encode(items: &[PaletteItem], format: PaletteFormat) -> IoResult<String> {
    match format {
        PaletteFormat::Json => json::encode_items(items),
        PaletteFormat::Gpl => Ok(gpl::encode_items(items)),
    }
}

/// Decodes `text` and swaps it into `store` only if decoding succeeds.
///
/// On error the store keeps its previous contents.
pub fn load_into(store: &mut PaletteStore, text: &str, format: PaletteFormat) -> IoResult<usize> {
    let items = decode(text, format)?;
    let count = items.len();
    store.replace_all(items);
    Ok(count)
}

/// Reads a palette file.
///
/// With no explicit format, the extension decides, then the content.
pub fn read_palette<P: AsRef<Path>>(
    path: P,
    format: Option<PaletteFormat>,
) -> IoResult<(PaletteFormat, Vec<PaletteItem>)> {
    let path = path.as_ref();
    trace!(path = %path.display(), "read_palette");

    let text = String::from_utf8(fs::read(path)?)?;
    let format = format.unwrap_or_else(|| PaletteFormat::detect(path, &text));
    let items = decode(&text, format)?;

    info!(path = %path.display(), format = %format, count = items.len(), "Read palette");
    Ok((format, items))
}

/// Writes an index-sorted snapshot to a palette file.
pub fn write_palette<P: AsRef<Path>>(
    path: P,
    items: &[PaletteItem],
    format: PaletteFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    let text = encode(items, format)?;
    fs::write(path, text)?;
    info!(path = %path.display(), format = %format, count = items.len(), "Wrote palette");
    Ok(())
}
