//! swatch - palette interchange and swatch sheet CLI
//!
//! Edits palettes, converts between palette.v1 JSON and GIMP .gpl, and
//! renders PNG swatch sheets.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use swatch_io::PaletteFormat;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(author, version, about = "Palette interchange and swatch sheet CLI")]
#[command(long_about = "
Build named, indexed color palettes and move them between palette.v1 JSON,
GIMP .gpl and rendered PNG swatch sheets.

Examples:
  swatch new colors.json                           # Empty palette
  swatch add colors.json -n Sky -i 0 -x '#87ceeb'  # Add or update index 0
  swatch remove colors.json -i 0                   # Remove the entry at index 0
  swatch info colors.json                          # List entries
  swatch convert colors.json colors.gpl            # JSON -> GPL
  swatch render colors.gpl -o sheet.png --row-len 4 --scale 2
  swatch render colors.json -o sheet.png --config layout.yaml
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List palette entries
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Convert between palette formats
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Render a palette to a PNG swatch sheet
    #[command(visible_alias = "r")]
    Render(RenderArgs),

    /// Add a color, or update the entry at the same index
    Add(AddArgs),

    /// Remove the entry at an index
    #[command(visible_alias = "rm")]
    Remove(RemoveArgs),

    /// Write an empty palette
    New(NewArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Palette file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Input format: json, gpl (default: by extension, then content)
    #[arg(short, long)]
    format: Option<PaletteFormat>,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input palette
    input: PathBuf,

    /// Output palette
    output: PathBuf,

    /// Input format: json, gpl
    #[arg(long)]
    from: Option<PaletteFormat>,

    /// Output format: json, gpl (default: by extension, then json)
    #[arg(long)]
    to: Option<PaletteFormat>,
}

#[derive(Args)]
struct RenderArgs {
    /// Input palette
    input: PathBuf,

    /// Output PNG
    #[arg(short, long)]
    output: PathBuf,

    /// Input format: json, gpl
    #[arg(short, long)]
    format: Option<PaletteFormat>,

    /// YAML layout file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Swatches per row (1-256)
    #[arg(long)]
    row_len: Option<u32>,

    /// Swatch width in pixels (8-1024)
    #[arg(long)]
    swatch_width: Option<u32>,

    /// Swatch height in pixels (8-1024)
    #[arg(long)]
    swatch_height: Option<u32>,

    /// Horizontal gap in pixels (0-1024)
    #[arg(long)]
    gap_h: Option<u32>,

    /// Vertical gap in pixels (0-1024)
    #[arg(long)]
    gap_v: Option<u32>,

    /// Label font family (e.g. "Inter, sans-serif")
    #[arg(long)]
    font: Option<String>,

    /// Label font size in pixels (6-256)
    #[arg(long)]
    font_size: Option<u32>,

    /// Export scale (1-16)
    #[arg(short, long)]
    scale: Option<u32>,
}

#[derive(Args)]
struct AddArgs {
    /// Palette file to edit
    palette: PathBuf,

    /// Color name
    #[arg(short, long, default_value = "")]
    name: String,

    /// Index (0-999999); an existing entry with this index is updated
    #[arg(short, long)]
    index: u32,

    /// Hex color (#RRGGBB); anything else becomes #000000
    #[arg(short = 'x', long)]
    hex: String,

    /// Palette format: json, gpl
    #[arg(short, long)]
    format: Option<PaletteFormat>,
}

#[derive(Args)]
struct RemoveArgs {
    /// Palette file to edit
    palette: PathBuf,

    /// Index of the entry to remove
    #[arg(short, long)]
    index: u32,

    /// Palette format: json, gpl
    #[arg(short, long)]
    format: Option<PaletteFormat>,
}

#[derive(Args)]
struct NewArgs {
    /// Output palette
    output: PathBuf,

    /// Output format: json, gpl (default: by extension, then json)
    #[arg(short, long)]
    format: Option<PaletteFormat>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

/// Installs the stderr tracing subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Render(args) => commands::render::run(args, cli.verbose),
        Commands::Add(args) => commands::add::run(args, cli.verbose),
        Commands::Remove(args) => commands::remove::run(args, cli.verbose),
        Commands::New(args) => commands::new::run(args, cli.verbose),
    }
}
