//! Palette entries and the in-memory palette store.
//!
//! [`PaletteStore`] owns an ordered collection of [`PaletteItem`]s. Its
//! internal order is insertion order; consumers that need a stable view
//! (codecs, the rasterizer) take a [`PaletteStore::snapshot_sorted_by_index`]
//! copy and never touch the live collection.
//!
//! `index` is a display/ordering key, not an identity. Two items may share
//! an index (e.g. after loading a hand-edited JSON file); the store only
//! avoids creating duplicates itself by updating in place on
//! [`PaletteStore::add_or_update`].

use std::fmt;

use tracing::{debug, trace};
use uuid::Uuid;

use crate::color::normalize_hex;

/// Largest index a palette item may carry.
pub const MAX_INDEX: u32 = 999_999;

/// Render key used when a name has no usable characters.
pub const FALLBACK_SLUG: &str = "color";

/// Session-local identity of a palette item.
///
/// Assigned once at creation and never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generates a fresh random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single named color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItem {
    /// Session identity.
    pub id: ItemId,
    /// Display name, may be empty.
    pub name: String,
    /// Ordering key, `0..=MAX_INDEX`.
    pub index: u32,
    /// Canonical `#RRGGBB` color.
    pub hex: String,
}

impl PaletteItem {
    /// Creates an item with a fresh id, normalizing `hex` and clamping `index`.
    pub fn new(name: impl Into<String>, index: u32, hex: &str) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            index: index.min(MAX_INDEX),
            hex: normalize_hex(hex),
        }
    }

    /// Render key derived from the name.
    pub fn slug(&self) -> String {
        slug_of(&self.name)
    }
}

/// Which branch [`PaletteStore::add_or_update`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new item was appended.
    Added(ItemId),
    /// An item with the same index was overwritten in place.
    Updated(ItemId),
}

impl AddOutcome {
    /// Identity of the touched item.
    pub fn id(&self) -> ItemId {
        match *self {
            AddOutcome::Added(id) | AddOutcome::Updated(id) => id,
        }
    }

    /// Human-readable status line.
    pub fn status(&self, index: u32) -> String {
        match self {
            AddOutcome::Added(_) => format!("Added color at index {}", index),
            AddOutcome::Updated(_) => format!("Updated color at index {}", index),
        }
    }
}

/// Ordered, explicitly owned palette collection.
#[derive(Debug, Clone, Default)]
pub struct PaletteStore {
    items: Vec<PaletteItem>,
}

impl PaletteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `items` in the given order.
    pub fn from_items(items: Vec<PaletteItem>) -> Self {
        Self { items }
    }

    /// Inserts a color, or overwrites name and hex of the item at `index`.
    ///
    /// The hex is normalized first. An update keeps the item's id.
    pub fn add_or_update(&mut self, name: &str, index: u32, hex_raw: &str) -> AddOutcome {
        let index = index.min(MAX_INDEX);
        let hex = normalize_hex(hex_raw);
        trace!(item_name = name, index, hex = %hex, "add_or_update");

        if let Some(item) = self.items.iter_mut().find(|item| item.index == index) {
            item.name = name.to_string();
            item.hex = hex;
            debug!(id = %item.id, index, "Updated palette item in place");
            return AddOutcome::Updated(item.id);
        }

        let item = PaletteItem {
            id: ItemId::new(),
            name: name.to_string(),
            index,
            hex,
        };
        let id = item.id;
        self.items.push(item);
        debug!(id = %id, index, "Appended palette item");
        AddOutcome::Added(id)
    }

    /// Removes the item with the given identity. Returns whether one was removed.
    pub fn remove_by_id(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        debug!(id = %id, removed, "remove_by_id");
        removed
    }

    /// Replaces the whole collection, e.g. after a successful decode.
    pub fn replace_all(&mut self, items: Vec<PaletteItem>) {
        debug!(count = items.len(), "Replacing palette");
        self.items = items;
    }

    /// Discards every item.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Looks an item up by identity.
    pub fn get(&self, id: ItemId) -> Option<&PaletteItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// First item carrying `index`, in insertion order.
    pub fn find_by_index(&self, index: u32) -> Option<&PaletteItem> {
        self.items.iter().find(|item| item.index == index)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteItem> {
        self.items.iter()
    }

    /// Copy of the collection sorted ascending by index.
    ///
    /// The sort is stable, so items sharing an index keep insertion order.
    pub fn snapshot_sorted_by_index(&self) -> Vec<PaletteItem> {
        let mut snapshot = self.items.clone();
        snapshot.sort_by_key(|item| item.index);
        snapshot
    }
}

/// Derives a lowercase, hyphen-separated render key from a name.
///
/// Runs of characters outside `[a-z0-9]` collapse to one hyphen; leading
/// and trailing hyphens are dropped. Empty results become [`FALLBACK_SLUG`].
pub fn slug_of(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}
