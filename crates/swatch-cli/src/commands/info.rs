//! Info command: list palette entries.

use crate::InfoArgs;
use anyhow::Result;
use swatch_core::{contrast_text, hex_to_rgb};
use tracing::trace;

pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    for path in &args.input {
        trace!(path = %path.display(), "info::run");
        let (format, store) = super::load_palette(path, args.format)?;

        println!("{} ({}, {} colors)", path.display(), format, store.len());
        for item in store.snapshot_sorted_by_index() {
            let [r, g, b] = hex_to_rgb(&item.hex);
            if verbose > 0 {
                println!(
                    "  {:>6}  {}  {:>3} {:>3} {:>3}  text {}  {:<20}  {}",
                    item.index,
                    item.hex,
                    r,
                    g,
                    b,
                    contrast_text(&item.hex),
                    item.slug(),
                    item.name
                );
            } else {
                println!("  {:>6}  {}  {}", item.index, item.hex, item.name);
            }
        }
    }
    Ok(())
}
