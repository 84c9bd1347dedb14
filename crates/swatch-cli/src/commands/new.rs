//! New command: write an empty palette.

use crate::NewArgs;
use anyhow::{bail, Result};
use swatch_core::PaletteStore;
use tracing::trace;

pub fn run(args: NewArgs, verbose: u8) -> Result<()> {
    trace!(output = %args.output.display(), "new::run");

    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let format = super::output_format(&args.output, args.format);
    super::save_palette(&args.output, &PaletteStore::new(), format)?;

    if verbose > 0 {
        println!("Format: {}", format);
    }
    println!("Created {}", args.output.display());
    Ok(())
}
