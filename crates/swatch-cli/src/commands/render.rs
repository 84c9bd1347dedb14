//! Render command: palette -> PNG swatch sheet.
//!
//! Layout comes from an optional YAML file, then per-flag overrides, and
//! is clamped to the supported ranges before rendering.

use crate::RenderArgs;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use swatch_core::GridLayout;
use swatch_render::{Rasterizer, RenderConfig};
use tracing::{debug, info, trace};

pub fn run(args: RenderArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "render::run");

    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => RenderConfig::default(),
    };
    let config = apply_overrides(base, &args).clamped();
    debug!(?config, "Render config");

    let (_, store) = super::load_palette(&args.input, args.format)?;
    let snapshot = store.snapshot_sorted_by_index();

    if verbose > 0 {
        let g = config.scaled();
        let grid = GridLayout::compute(
            snapshot.len(),
            g.row_len,
            g.swatch_width,
            g.swatch_height,
            g.gap_h,
            g.gap_v,
        );
        println!(
            "Rendering {} colors as {}x{} grid, {}x{} px",
            snapshot.len(),
            grid.cols,
            grid.rows,
            grid.canvas_width,
            grid.canvas_height
        );
    }

    let mut rasterizer = Rasterizer::new();
    let job = rasterizer
        .render_deferred(&snapshot, &config)
        .context("Render failed")?;
    let bytes = job.wait().context("Render failed")?;

    fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to save: {}", args.output.display()))?;

    info!(output = %args.output.display(), bytes = bytes.len(), "Wrote swatch sheet");
    println!("Rendered {} colors to {}", snapshot.len(), args.output.display());
    Ok(())
}

/// Reads a YAML layout file. Missing keys keep their defaults.
fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Invalid config: {}", path.display()))
}

fn parse_config(text: &str) -> Result<RenderConfig> {
    Ok(serde_yaml::from_str(text)?)
}

/// Applies command-line flags on top of `config`.
fn apply_overrides(mut config: RenderConfig, args: &RenderArgs) -> RenderConfig {
    if let Some(v) = args.row_len {
        config.row_len = v;
    }
    if let Some(v) = args.swatch_width {
        config.swatch_width = v;
    }
    if let Some(v) = args.swatch_height {
        config.swatch_height = v;
    }
    if let Some(v) = args.gap_h {
        config.gap_h = v;
    }
    if let Some(v) = args.gap_v {
        config.gap_v = v;
    }
    if let Some(ref v) = args.font {
        config.font_face = v.clone();
    }
    if let Some(v) = args.font_size {
        config.font_size_px = v;
    }
    if let Some(v) = args.scale {
        config.scale = v;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn bare_args() -> RenderArgs {
        RenderArgs {
            input: PathBuf::from("in.json"),
            output: PathBuf::from("out.png"),
            format: None,
            config: None,
            row_len: None,
            swatch_width: None,
            swatch_height: None,
            gap_h: None,
            gap_v: None,
            font: None,
            font_size: None,
            scale: None,
        }
    }

    #[test]
    fn test_parse_partial_yaml() {
        let config = parse_config("row_len: 4\nfont_face: serif\nscale: 2\n").unwrap();
        assert_eq!(config.row_len, 4);
        assert_eq!(config.font_face, "serif");
        assert_eq!(config.scale, 2);
        assert_eq!(config.swatch_width, RenderConfig::default().swatch_width);
    }

    #[test]
    fn test_parse_rejects_bad_types() {
        assert!(parse_config("row_len: many\n").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let base = parse_config("row_len: 4\ngap_h: 2\n").unwrap();
        let args = RenderArgs {
            row_len: Some(10),
            font: Some("monospace".into()),
            scale: Some(40),
            ..bare_args()
        };
        let config = apply_overrides(base, &args).clamped();
        assert_eq!(config.row_len, 10);
        assert_eq!(config.gap_h, 2);
        assert_eq!(config.font_face, "monospace");
        assert_eq!(config.scale, 16);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.yaml");
        fs::write(&path, "swatch_height: 64\n").unwrap();
        assert_eq!(load_config(&path).unwrap().swatch_height, 64);
        assert!(load_config(&dir.path().join("missing.yaml")).is_err());
    }
}
