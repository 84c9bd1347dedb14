//! Hex color normalization and contrast decisions.
//!
//! Palette colors travel through the whole pipeline as canonical hex
//! strings: `#` followed by exactly six uppercase hexadecimal digits.
//! Anything else is coerced to [`FALLBACK_HEX`] rather than rejected, so a
//! single bad entry never fails a whole load.
//!
//! # Contrast
//!
//! Label colors are picked from the relative luminance of the swatch:
//!
//! ```text
//! c = channel / 255
//! C = c / 12.92                      if c <= 0.04045
//! C = ((c + 0.055) / 1.055)^2.4      otherwise
//! Y = 0.2126 R + 0.7152 G + 0.0722 B
//! ```
//!
//! `Y > 0.5` gets [`DARK_TEXT`], everything else [`LIGHT_TEXT`].
//!
//! # Example
//!
//! ```rust
//! use swatch_core::color::{contrast_text, normalize_hex};
//!
//! assert_eq!(normalize_hex("#ff8800"), "#FF8800");
//! assert_eq!(normalize_hex("orange"), "#000000");
//! assert_eq!(contrast_text("#FFFFFF"), "#111111");
//! ```

/// Hex used for any input that is not `#` + 6 hex digits.
pub const FALLBACK_HEX: &str = "#000000";

/// Near-black label color, used on light swatches.
pub const DARK_TEXT: &str = "#111111";

/// White label color, used on dark swatches.
pub const LIGHT_TEXT: &str = "#FFFFFF";

/// Luminance above which a swatch counts as light.
pub const LUMINANCE_THRESHOLD: f64 = 0.5;

/// Rec.709 / sRGB luminance weights.
const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Returns `true` if `input` is `#` followed by exactly six hex digits.
#[inline]
pub fn is_valid_hex(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit)
}

/// Normalizes a hex color to its canonical uppercase form.
///
/// Total and idempotent: invalid input yields [`FALLBACK_HEX`].
pub fn normalize_hex(input: &str) -> String {
    if is_valid_hex(input) {
        input.to_ascii_uppercase()
    } else {
        FALLBACK_HEX.to_string()
    }
}

/// Decodes a hex color into 8-bit RGB channels.
///
/// The input is normalized first, so invalid strings decode to black.
pub fn hex_to_rgb(hex: &str) -> [u8; 3] {
    let hex = normalize_hex(hex);
    let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).unwrap_or(0);
    [channel(1), channel(3), channel(5)]
}

/// Encodes 8-bit RGB channels as a canonical hex color.
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

/// sRGB EOTF: decodes an encoded channel in [0, 1] to linear light.
#[inline]
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a hex color, in [0, 1].
pub fn relative_luminance(hex: &str) -> f64 {
    hex_to_rgb(hex)
        .iter()
        .zip(LUMA_WEIGHTS)
        .map(|(&c, w)| w * srgb_to_linear(f64::from(c) / 255.0))
        .sum()
}

/// Picks a legible label color for text drawn on `hex`.
pub fn contrast_text(hex: &str) -> &'static str {
    if relative_luminance(hex) > LUMINANCE_THRESHOLD {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_uppercases_valid() {
        assert_eq!(normalize_hex("#a1b2c3"), "#A1B2C3");
        assert_eq!(normalize_hex("#A1b2C3"), "#A1B2C3");
    }

    #[test]
    fn test_normalize_rejects_malformed() {
        for bad in ["", "#", "#FFF", "FFFFFF", "#FFFFFFF", "#GG0000", " #FFFFFF", "#FFFFFF ", "#ÿÿÿ"] {
            assert_eq!(normalize_hex(bad), FALLBACK_HEX, "input {:?}", bad);
        }
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["#abcdef", "nope", "#000000", "#12345"] {
            let once = normalize_hex(input);
            assert_eq!(normalize_hex(&once), once);
        }
    }

    #[test]
    fn test_hex_rgb() {
        assert_eq!(hex_to_rgb("#FF8000"), [255, 128, 0]);
        assert_eq!(hex_to_rgb("#ff8000"), [255, 128, 0]);
        assert_eq!(hex_to_rgb("garbage"), [0, 0, 0]);
        assert_eq!(rgb_to_hex([255, 128, 0]), "#FF8000");
        assert_eq!(rgb_to_hex([1, 2, 3]), "#010203");
    }

    #[test]
    fn test_srgb_to_linear() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert_relative_eq!(srgb_to_linear(1.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(srgb_to_linear(0.04045), 0.04045 / 12.92, epsilon = 1e-12);
        // sRGB 0.5 is roughly 0.214 linear
        assert!((srgb_to_linear(0.5) - 0.214).abs() < 0.001);
    }

    #[test]
    fn test_luminance_extremes() {
        assert_relative_eq!(relative_luminance("#FFFFFF"), 1.0, epsilon = 1e-9);
        assert_eq!(relative_luminance("#000000"), 0.0);
        assert_relative_eq!(relative_luminance("#00FF00"), 0.7152, epsilon = 1e-9);
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(contrast_text("#FFFFFF"), DARK_TEXT);
        assert_eq!(contrast_text("#000000"), LIGHT_TEXT);
        // Pure green is light, pure blue is dark
        assert_eq!(contrast_text("#00FF00"), DARK_TEXT);
        assert_eq!(contrast_text("#0000FF"), LIGHT_TEXT);
        // Mid grey 0x80 sits at ~0.216 luminance
        assert_eq!(contrast_text("#808080"), LIGHT_TEXT);
        assert_eq!(contrast_text("not a color"), LIGHT_TEXT);
    }

    #[test]
    fn test_contrast_threshold_is_strict() {
        // #BCBCBC is the first grey above 0.5, #BBBBBB sits just below
        assert!(relative_luminance("#BBBBBB") < LUMINANCE_THRESHOLD);
        assert!(relative_luminance("#BCBCBC") > LUMINANCE_THRESHOLD);
        assert_eq!(contrast_text("#BBBBBB"), LIGHT_TEXT);
        assert_eq!(contrast_text("#BCBCBC"), DARK_TEXT);
    }
}
