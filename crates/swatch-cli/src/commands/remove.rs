//! Remove command: drop the entry carrying an index.

use crate::RemoveArgs;
use anyhow::Result;
use tracing::trace;

pub fn run(args: RemoveArgs, verbose: u8) -> Result<()> {
    trace!(palette = %args.palette.display(), index = args.index, "remove::run");

    let (format, mut store) = super::load_palette(&args.palette, args.format)?;

    let Some(id) = store.find_by_index(args.index).map(|item| item.id) else {
        println!("No color at index {}", args.index);
        return Ok(());
    };

    if verbose > 0 {
        if let Some(item) = store.get(id) {
            println!("  {} {}", item.hex, item.name);
        }
    }

    store.remove_by_id(id);
    super::save_palette(&args.palette, &store, format)?;

    println!("Removed color at index {} ({} left)", args.index, store.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::PaletteItem;
    use swatch_io::PaletteFormat;

    #[test]
    fn test_remove_by_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        let items = vec![
            PaletteItem::new("Red", 0, "#FF0000"),
            PaletteItem::new("Green", 5, "#00FF00"),
            PaletteItem::new("Blue", 9, "#0000FF"),
        ];
        swatch_io::write_palette(&path, &items, PaletteFormat::Json).unwrap();

        let args = RemoveArgs {
            palette: path.clone(),
            index: 5,
            format: None,
        };
        run(args, 1).unwrap();

        let (_, items) = swatch_io::read_palette(&path, None).unwrap();
        let names: Vec<_> = items.iter().map(|i| (i.name.as_str(), i.index)).collect();
        assert_eq!(names, [("Red", 0), ("Blue", 9)]);
    }

    #[test]
    fn test_remove_unknown_index_leaves_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        swatch_io::write_palette(&path, &[PaletteItem::new("Red", 0, "#FF0000")], PaletteFormat::Json)
            .unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let args = RemoveArgs {
            palette: path.clone(),
            index: 3,
            format: None,
        };
        run(args, 0).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }
}
