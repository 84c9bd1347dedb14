//! GIMP palette (.gpl) format support.
//!
//! # Format
//!
//! ```text
//! GIMP Palette
//! Name: Palette
//! #
//! 255   0   0	Red
//!   0 128 255	Azure
//! ```
//!
//! Each color line holds three decimal channels right-aligned in 3-wide
//! fields, a tab, and the name. The format has no index field: on reading,
//! items are renumbered `0..n` in file order, so indices saved from JSON do
//! not survive a trip through GPL.
//!
//! Reading never fails. Header, comment and blank lines are ignored and
//! lines that don't start with three integers are skipped.

use lazy_static::lazy_static;
use regex::Regex;
use swatch_core::{hex_to_rgb, rgb_to_hex, PaletteItem, PaletteStore};
use tracing::{debug, trace};

/// First line of every GIMP palette.
pub const HEADER: &str = "GIMP Palette";

/// Palette name written into the header.
pub const PALETTE_NAME: &str = "Palette";

/// Line prefixes that never carry a color.
const SKIP_PREFIXES: [&str; 4] = ["#", HEADER, "Name:", "Columns:"];

lazy_static! {
    static ref COLOR_LINE: Regex =
        Regex::new(r"^([0-9]+)\s+([0-9]+)\s+([0-9]+)\s*(.*)$").expect("valid GPL line regex");
}

/// Encodes the store as GPL text, sorted by index.
pub fn encode(store: &PaletteStore) -> String {
    encode_items(&store.snapshot_sorted_by_index())
}

/// Encodes an already index-sorted snapshot.
pub fn encode_items(items: &[PaletteItem]) -> String {
    trace!(count = items.len(), "gpl::encode_items");
    let mut lines = Vec::with_capacity(items.len() + 3);
    lines.push(HEADER.to_string());
    lines.push(format!("Name: {}", PALETTE_NAME));
    lines.push("#".to_string());

    for item in items {
        let [r, g, b] = hex_to_rgb(&item.hex);
        lines.push(format!("{:>3} {:>3} {:>3}\t{}", r, g, b, collapse_whitespace(&item.name)));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Decodes GPL text into items numbered `0..n` in file order.
pub fn decode(text: &str) -> Vec<PaletteItem> {
    let text = text.replace("\r\n", "\n");
    let mut items = Vec::new();

    for (line_no, raw) in text.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() || SKIP_PREFIXES.iter().any(|p| line.starts_with(p)) {
            continue;
        }

        let Some(caps) = COLOR_LINE.captures(line) else {
            debug!(line = line_no + 1, content = line, "Skipping unrecognized GPL line");
            continue;
        };

        let n = items.len();
        let rgb = [
            parse_channel(&caps[1]),
            parse_channel(&caps[2]),
            parse_channel(&caps[3]),
        ];
        let rest = caps.get(4).map_or("", |m| m.as_str().trim());
        let name = if rest.is_empty() {
            format!("Color {}", n)
        } else {
            rest.to_string()
        };

        items.push(PaletteItem::new(name, n as u32, &rgb_to_hex(rgb)));
    }

    debug!(count = items.len(), "Decoded GIMP palette");
    items
}

/// Parses a decimal channel, clamped to 0..=255. Unparseable input is 0.
fn parse_channel(digits: &str) -> u8 {
    digits.parse::<u64>().map_or(0, |v| v.min(255) as u8)
}

/// Collapses whitespace runs to single spaces and trims the ends.
fn collapse_whitespace(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_exact_bytes() {
        let store = PaletteStore::from_items(vec![
            PaletteItem::new("  Deep \t  Blue ", 5, "#0000FF"),
            PaletteItem::new("Red", 1, "#FF0000"),
            PaletteItem::new("", 9, "#0A6480"),
        ]);
        let text = encode(&store);
        assert_eq!(
            text,
            "GIMP Palette\nName: Palette\n#\n255   0   0\tRed\n  0   0 255\tDeep Blue\n 10 100 128\t\n"
        );
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&PaletteStore::new()), "GIMP Palette\nName: Palette\n#\n");
    }

    #[test]
    fn test_decode_line() {
        let items = decode("255   0   0\tRed");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].hex, "#FF0000");
        assert_eq!(items[0].name, "Red");
        assert_eq!(items[0].index, 0);
    }

    #[test]
    fn test_decode_skips_headers_and_junk() {
        let text = "GIMP Palette\r\nName: Test\r\nColumns: 4\r\n# comment\r\n\r\n\
                    0 0 0\tBlack\r\nnot a color line\r\n1 2\r\n255 255 255 White\r\n";
        let items = decode(text);
        assert_eq!(items.len(), 2);
        assert_eq!((items[0].name.as_str(), items[0].index), ("Black", 0));
        assert_eq!((items[1].name.as_str(), items[1].index), ("White", 1));
        assert_eq!(items[1].hex, "#FFFFFF");
    }

    #[test]
    fn test_decode_default_names_use_accepted_count() {
        let items = decode("bad\n1 1 1\nworse\n2 2 2   \n");
        assert_eq!(items[0].name, "Color 0");
        assert_eq!(items[1].name, "Color 1");
        assert_eq!(items[1].index, 1);
    }

    #[test]
    fn test_decode_clamps_channels() {
        let items = decode("300 256 999999999999999999999999 Hot");
        assert_eq!(items[0].hex, "#FFFF00");
        assert_eq!(items[0].name, "Hot");
    }

    #[test]
    fn test_decode_rejects_negative_and_unicode_digits() {
        assert!(decode("-1 0 0 Neg").is_empty());
        assert!(decode("١ ٢ ٣ Arabic").is_empty());
    }

    #[test]
    fn test_fixed_point_after_one_hop() {
        let store = PaletteStore::from_items(vec![
            PaletteItem::new("Sky   Blue", 40, "#87CEEB"),
            PaletteItem::new("", 10, "#123456"),
            PaletteItem::new("Ink", 20, "#1A1A2E"),
        ]);
        let first = encode(&store);
        let second = encode_items(&decode(&first));
        let third = encode_items(&decode(&second));
        assert_eq!(second, third);
    }
}
