//! PNG encoding of finished surfaces.
//!
//! Output is 8-bit RGBA with an sRGB chunk, written to memory.

use tracing::trace;

use crate::{RenderError, RenderResult, Surface};

/// Encodes a surface as PNG bytes.
///
/// # Example
///
/// ```rust
/// use swatch_render::{png::encode, Surface};
///
/// let surface = Surface::new(8, 8).unwrap();
/// let bytes = encode(&surface).unwrap();
/// assert_eq!(&bytes[1..4], b"PNG");
/// ```
pub fn encode(surface: &Surface) -> RenderResult<Vec<u8>> {
    trace!(width = surface.width(), height = surface.height(), "png::encode");
    let mut bytes = Vec::new();

    let mut encoder = png::Encoder::new(&mut bytes, surface.width(), surface.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut writer = encoder
        .write_header()
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    writer
        .write_image_data(surface.data())
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| RenderError::Encode(e.to_string()))?;

    Ok(bytes)
}
