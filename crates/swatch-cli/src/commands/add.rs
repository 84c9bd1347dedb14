//! Add command: add a color or update the entry at the same index.

use crate::AddArgs;
use anyhow::Result;
use swatch_core::color::is_valid_hex;
use tracing::{trace, warn};

pub fn run(args: AddArgs, verbose: u8) -> Result<()> {
    trace!(palette = %args.palette.display(), index = args.index, "add::run");

    let (format, mut store) = super::load_palette(&args.palette, args.format)?;

    if !is_valid_hex(&args.hex) {
        warn!(hex = %args.hex, "Not a #RRGGBB color, storing #000000");
    }

    let outcome = store.add_or_update(&args.name, args.index, &args.hex);
    super::save_palette(&args.palette, &store, format)?;

    if verbose > 0 {
        if let Some(item) = store.get(outcome.id()) {
            println!("  {} {} ({})", item.hex, item.name, item.slug());
        }
    }
    println!("{}", outcome.status(args.index.min(swatch_core::MAX_INDEX)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use swatch_io::PaletteFormat;

    fn add(path: &Path, name: &str, index: u32, hex: &str) {
        let args = AddArgs {
            palette: path.to_path_buf(),
            name: name.into(),
            index,
            hex: hex.into(),
            format: None,
        };
        run(args, 0).unwrap();
    }

    #[test]
    fn test_add_then_update_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        swatch_io::write_palette(&path, &[], PaletteFormat::Json).unwrap();

        add(&path, "Sky", 2, "#87ceeb");
        add(&path, "Ink", 0, "#000000");
        add(&path, "Deep Sky", 2, "#00BFFF");

        let (format, items) = swatch_io::read_palette(&path, None).unwrap();
        assert_eq!(format, PaletteFormat::Json);
        assert_eq!(items.len(), 2);
        assert_eq!((items[0].name.as_str(), items[0].index), ("Ink", 0));
        assert_eq!(items[1].name, "Deep Sky");
        assert_eq!(items[1].index, 2);
        assert_eq!(items[1].hex, "#00BFFF");
    }

    #[test]
    fn test_add_keeps_gpl_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.gpl");
        swatch_io::write_palette(&path, &[], PaletteFormat::Gpl).unwrap();

        add(&path, "Bad", 0, "red");

        let (format, items) = swatch_io::read_palette(&path, None).unwrap();
        assert_eq!(format, PaletteFormat::Gpl);
        assert_eq!(items[0].hex, "#000000");
    }

    #[test]
    fn test_add_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = AddArgs {
            palette: dir.path().join("missing.json"),
            name: "X".into(),
            index: 0,
            hex: "#FFFFFF".into(),
            format: None,
        };
        assert!(run(args, 0).is_err());
    }
}
