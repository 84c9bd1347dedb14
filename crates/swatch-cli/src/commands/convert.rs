//! Convert command: palette.v1 JSON <-> GIMP .gpl.

use crate::ConvertArgs;
use anyhow::Result;
use swatch_io::PaletteFormat;
use tracing::{info, trace, warn};

pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "convert::run");

    let (from, store) = super::load_palette(&args.input, args.from)?;
    let to = super::output_format(&args.output, args.to);

    info!(
        input = %args.input.display(),
        from = %from,
        output = %args.output.display(),
        to = %to,
        "Converting palette"
    );

    if to == PaletteFormat::Gpl {
        let snapshot = store.snapshot_sorted_by_index();
        if snapshot.iter().enumerate().any(|(i, item)| item.index as usize != i) {
            warn!("GPL has no index field; indices will read back as 0..{}", snapshot.len());
        }
    }

    super::save_palette(&args.output, &store, to)?;

    if verbose > 0 {
        println!(
            "Converted {} ({}) -> {} ({})",
            args.input.display(),
            from,
            args.output.display(),
            to
        );
    }
    println!("Saved {} colors to {}", store.len(), args.output.display());
    Ok(())
}
