//! Render configuration.
//!
//! [`RenderConfig`] is what a driver (CLI, UI, batch script) hands to the
//! rasterizer. Values are plain numbers; [`RenderConfig::clamped`] pulls
//! each into its documented range so the layout and drawing code never
//! has to validate.
//!
//! | Field | Range | Default |
//! |-------|-------|---------|
//! | `row_len` | 1..=256 | 6 |
//! | `swatch_width`, `swatch_height` | 8..=1024 | 120, 80 |
//! | `gap_h`, `gap_v` | 0..=1024 | 8 |
//! | `font_size_px` | 6..=256 | 14 |
//! | `scale` | 1..=16 | 1 |

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed items per row.
pub const ROW_LEN_RANGE: RangeInclusive<u32> = 1..=256;
/// Allowed swatch width/height in base pixels.
pub const SWATCH_RANGE: RangeInclusive<u32> = 8..=1024;
/// Allowed gap in base pixels.
pub const GAP_RANGE: RangeInclusive<u32> = 0..=1024;
/// Allowed font size in base pixels.
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 6..=256;
/// Allowed export scale.
pub const SCALE_RANGE: RangeInclusive<u32> = 1..=16;

/// Smallest label font size after per-cell clamping.
pub const MIN_LABEL_FONT_PX: u32 = 6;

/// Left padding of labels, in base pixels.
pub const LABEL_PADDING_PX: u32 = 8;

/// Swatch grid and label settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Swatches per row.
    pub row_len: u32,
    /// Swatch width in base pixels.
    pub swatch_width: u32,
    /// Swatch height in base pixels.
    pub swatch_height: u32,
    /// Horizontal gap between swatches.
    pub gap_h: u32,
    /// Vertical gap between rows.
    pub gap_v: u32,
    /// Font family, CSS style (`"Inter, sans-serif"`) or a generic name.
    pub font_face: String,
    /// Label font size in base pixels.
    pub font_size_px: u32,
    /// Integer export scale.
    pub scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            row_len: 6,
            swatch_width: 120,
            swatch_height: 80,
            gap_h: 8,
            gap_v: 8,
            font_face: "sans-serif".to_string(),
            font_size_px: 14,
            scale: 1,
        }
    }
}

/// Pixel geometry after scaling, ready for layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledGeometry {
    /// Swatches per row.
    pub row_len: u32,
    /// Scaled swatch width.
    pub swatch_width: u32,
    /// Scaled swatch height.
    pub swatch_height: u32,
    /// Scaled horizontal gap.
    pub gap_h: u32,
    /// Scaled vertical gap.
    pub gap_v: u32,
    /// Scaled font size, before per-cell clamping.
    pub font_size_px: u32,
    /// Scaled label padding.
    pub padding: u32,
}

impl ScaledGeometry {
    /// Font size actually used for labels: `clamp(font, 6, max(6, swatch_height))`.
    pub fn label_font_size(&self) -> u32 {
        let upper = MIN_LABEL_FONT_PX.max(self.swatch_height);
        self.font_size_px.clamp(MIN_LABEL_FONT_PX, upper)
    }
}

impl RenderConfig {
    /// Create new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with every field pulled into its documented range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            row_len: clamp_to(self.row_len, &ROW_LEN_RANGE),
            swatch_width: clamp_to(self.swatch_width, &SWATCH_RANGE),
            swatch_height: clamp_to(self.swatch_height, &SWATCH_RANGE),
            gap_h: clamp_to(self.gap_h, &GAP_RANGE),
            gap_v: clamp_to(self.gap_v, &GAP_RANGE),
            font_face: self.font_face.clone(),
            font_size_px: clamp_to(self.font_size_px, &FONT_SIZE_RANGE),
            scale: clamp_to(self.scale, &SCALE_RANGE),
        }
    }

    /// Multiplies sizes, gaps, font size and padding by `scale`.
    ///
    /// A scale of 0 is treated as 1.
    pub fn scaled(&self) -> ScaledGeometry {
        let s = self.scale.max(1);
        ScaledGeometry {
            row_len: self.row_len,
            swatch_width: self.swatch_width.saturating_mul(s),
            swatch_height: self.swatch_height.saturating_mul(s),
            gap_h: self.gap_h.saturating_mul(s),
            gap_v: self.gap_v.saturating_mul(s),
            font_size_px: self.font_size_px.saturating_mul(s),
            padding: LABEL_PADDING_PX.saturating_mul(s),
        }
    }
}

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_in_range() {
        let config = RenderConfig::default();
        assert_eq!(config.clamped(), config);
    }

    #[test]
    fn test_clamped() {
        let config = RenderConfig {
            row_len: 0,
            swatch_width: 2,
            swatch_height: 5000,
            gap_h: 4000,
            gap_v: 3,
            font_face: "serif".into(),
            font_size_px: 1,
            scale: 99,
        }
        .clamped();

        assert_eq!(config.row_len, 1);
        assert_eq!(config.swatch_width, 8);
        assert_eq!(config.swatch_height, 1024);
        assert_eq!(config.gap_h, 1024);
        assert_eq!(config.gap_v, 3);
        assert_eq!(config.font_size_px, 6);
        assert_eq!(config.scale, 16);
        assert_eq!(config.font_face, "serif");
    }

    #[test]
    fn test_scaled() {
        let config = RenderConfig {
            scale: 2,
            ..Default::default()
        };
        let g = config.scaled();
        assert_eq!(g.swatch_width, 240);
        assert_eq!(g.swatch_height, 160);
        assert_eq!(g.gap_h, 16);
        assert_eq!(g.font_size_px, 28);
        assert_eq!(g.padding, 16);
        assert_eq!(g.row_len, 6);
    }

    #[test]
    fn test_label_font_clamped_to_cell() {
        let config = RenderConfig {
            swatch_height: 10,
            font_size_px: 40,
            ..Default::default()
        };
        assert_eq!(config.scaled().label_font_size(), 10);

        let doubled = RenderConfig { scale: 2, ..config };
        assert_eq!(doubled.scaled().label_font_size(), 20);
    }
}
