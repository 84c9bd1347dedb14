//! Swatch label drawing.
//!
//! Labels are shaped with cosmic-text and composited straight onto the
//! [`Surface`], clipped to the swatch cell. A label sits `padding` pixels
//! from the cell's left edge and its line box is centered vertically.

use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache};
use swatch_core::Cell;

use crate::Surface;

/// Line box height as a multiple of font size.
pub const LINE_HEIGHT: f32 = 1.2;

/// One label to draw.
#[derive(Debug, Clone, Copy)]
pub struct Label<'a> {
    /// Label text.
    pub text: &'a str,
    /// Font face, CSS family list or generic name.
    pub font_face: &'a str,
    /// Font size in pixels.
    pub font_size: f32,
    /// Text color.
    pub color: [u8; 3],
    /// Left padding inside the cell.
    pub padding: u32,
}

/// Resolves the first family of a CSS-style font list.
///
/// Generic names map to cosmic-text's generic families; anything else is
/// looked up by name.
pub fn family_of(face: &str) -> Family<'_> {
    let first = face
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches(|c| c == '"' || c == '\'');

    match first.to_lowercase().as_str() {
        "" | "sans-serif" | "sans" | "system-ui" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" | "mono" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        _ => Family::Name(first),
    }
}

/// Draws `label` into `cell`. Nothing outside the cell is touched.
pub fn draw_label(
    font_system: &mut FontSystem,
    swash_cache: &mut SwashCache,
    surface: &mut Surface,
    cell: &Cell,
    label: &Label<'_>,
) {
    if label.text.is_empty() {
        return;
    }

    let line_height = label.font_size * LINE_HEIGHT;
    let mut buffer = Buffer::new(font_system, Metrics::new(label.font_size, line_height));
    buffer.set_size(font_system, None, None);

    let attrs = Attrs::new().family(family_of(label.font_face));
    buffer.set_text(font_system, label.text, &attrs, Shaping::Advanced);
    buffer.shape_until_scroll(font_system, false);

    let clip_left = cell.x as i64;
    let clip_top = cell.y as i64;
    let clip_right = cell.right() as i64;
    let clip_bottom = cell.bottom() as i64;

    let origin_x = clip_left + i64::from(label.padding);
    let origin_y = clip_top + ((cell.height as f32 - line_height) / 2.0).round() as i64;

    let [r, g, b] = label.color;
    buffer.draw(font_system, swash_cache, Color::rgb(r, g, b), |x, y, w, h, color| {
        let alpha = color.a();
        if alpha == 0 {
            return;
        }
        let rgb = [color.r(), color.g(), color.b()];

        for dy in 0..i64::from(h) {
            let py = origin_y + i64::from(y) + dy;
            if py < clip_top || py >= clip_bottom {
                continue;
            }
            for dx in 0..i64::from(w) {
                let px = origin_x + i64::from(x) + dx;
                if px < clip_left || px >= clip_right {
                    continue;
                }
                surface.blend_pixel(px as u32, py as u32, rgb, alpha);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_of() {
        assert_eq!(family_of("sans-serif"), Family::SansSerif);
        assert_eq!(family_of(""), Family::SansSerif);
        assert_eq!(family_of("Serif"), Family::Serif);
        assert_eq!(family_of("mono"), Family::Monospace);
        assert_eq!(family_of("\"Fira Sans\", sans-serif"), Family::Name("Fira Sans"));
        assert_eq!(family_of(" 'Inter' "), Family::Name("Inter"));
    }
}
