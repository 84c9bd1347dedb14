//! `palette.v1` JSON format support.
//!
//! # Format
//!
//! ```text
//! {
//!   "kind": "palette.v1",
//!   "items": [
//!     { "name": "Red", "index": 0, "hex": "#FF0000" },
//!     ...
//!   ]
//! }
//! ```
//!
//! Items are always written ascending by `index`. Reading is strict about
//! the envelope (`kind` and `items`) and lenient about each item: missing
//! or mistyped fields fall back to empty name, index 0 and black.
//!
//! # Example
//!
//! ```rust
//! use swatch_core::PaletteStore;
//! use swatch_io::json;
//!
//! let mut store = PaletteStore::new();
//! store.add_or_update("Red", 0, "#ff0000");
//!
//! let text = json::encode(&store).unwrap();
//! let items = json::decode(&text).unwrap();
//! assert_eq!(items[0].hex, "#FF0000");
//! ```

use serde::Serialize;
use serde_json::Value;
use swatch_core::{PaletteItem, PaletteStore, MAX_INDEX};
use tracing::{debug, trace};

use crate::{IoError, IoResult};

/// Value of the `kind` field.
pub const KIND: &str = "palette.v1";

#[derive(Serialize)]
struct PaletteFile<'a> {
    kind: &'a str,
    items: Vec<Entry<'a>>,
}

#[derive(Serialize)]
struct Entry<'a> {
    name: &'a str,
    index: u32,
    hex: &'a str,
}

/// Encodes the store as pretty-printed JSON, sorted by index.
pub fn encode(store: &PaletteStore) -> IoResult<String> {
    encode_items(&store.snapshot_sorted_by_index())
}

/// Encodes an already index-sorted snapshot.
///
/// Items are written as given; hex values are not normalized again.
pub fn encode_items(items: &[PaletteItem]) -> IoResult<String> {
    trace!(count = items.len(), "json::encode_items");
    let file = PaletteFile {
        kind: KIND,
        items: items
            .iter()
            .map(|item| Entry {
                name: &item.name,
                index: item.index,
                hex: &item.hex,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Decodes a `palette.v1` document into items, in file order.
///
/// Fails with [`IoError::Json`] on malformed JSON and [`IoError::Format`]
/// when the document is not a `palette.v1` object with an `items` array.
pub fn decode(text: &str) -> IoResult<Vec<PaletteItem>> {
    let doc: Value = serde_json::from_str(text)?;

    let Some(obj) = doc.as_object() else {
        return Err(IoError::Format("palette document must be an object".into()));
    };

    match obj.get("kind").and_then(Value::as_str) {
        Some(KIND) => {}
        Some(other) => {
            return Err(IoError::Format(format!(
                "expected kind \"{}\", found \"{}\"",
                KIND, other
            )));
        }
        None => return Err(IoError::Format(format!("missing kind \"{}\"", KIND))),
    }

    let Some(entries) = obj.get("items").and_then(Value::as_array) else {
        return Err(IoError::Format("items must be an array".into()));
    };

    let items: Vec<PaletteItem> = entries.iter().map(decode_item).collect();
    debug!(count = items.len(), "Decoded palette.v1 document");
    Ok(items)
}

/// Decodes one item, coercing bad fields to defaults.
fn decode_item(value: &Value) -> PaletteItem {
    let name = value.get("name").and_then(Value::as_str).unwrap_or("");
    let index = value.get("index").map_or(0, read_index);
    let hex = value
        .get("hex")
        .and_then(Value::as_str)
        .unwrap_or(swatch_core::color::FALLBACK_HEX);
    PaletteItem::new(name, index, hex)
}

/// Reads a JSON number as an index clamped to `0..=MAX_INDEX`.
///
/// Fractions truncate toward zero; non-numbers become 0.
fn read_index(value: &Value) -> u32 {
    if let Some(n) = value.as_u64() {
        return n.min(u64::from(MAX_INDEX)) as u32;
    }
    match value.as_f64() {
        Some(f) if f.is_finite() && f > 0.0 => f.trunc().min(f64::from(MAX_INDEX)) as u32,
        _ => 0,
    }
}
