//! RGBA8 drawing surface.
//!
//! A plain row-major buffer, 4 bytes per pixel, starting fully transparent.
//! Allocation is fallible: oversized or empty surfaces are refused with a
//! [`RenderError`] instead of aborting the process.

use crate::{RenderError, RenderResult};

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Largest pixel area a surface may cover (16384 x 16384).
pub const MAX_SURFACE_PIXELS: u64 = 16_384 * 16_384;

/// Owned RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Allocates a transparent surface.
    pub fn new(width: u64, height: u64) -> RenderResult<Self> {
        let refuse = |reason: &str| RenderError::InvalidSurface {
            width,
            height,
            reason: reason.to_string(),
        };

        if width == 0 || height == 0 {
            return Err(refuse("zero dimension"));
        }
        let pixels = width
            .checked_mul(height)
            .filter(|&p| p <= MAX_SURFACE_PIXELS)
            .ok_or_else(|| refuse("area exceeds surface limit"))?;
        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(refuse("dimension exceeds u32")),
        };

        let bytes = usize::try_from(pixels)
            .ok()
            .and_then(|p| p.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(|| refuse("byte size overflows"))?;

        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| RenderError::Allocation { bytes })?;
        data.resize(bytes, 0);

        Ok(Self {
            width: w,
            height: h,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Reads one pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let o = self.offset(x, y);
        Some([self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3]])
    }

    /// Fills a rectangle with an opaque-or-not RGBA color, clipped to the surface.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, rgba: [u8; 4]) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        if x >= x_end || y >= y_end {
            return;
        }

        for row in y..y_end {
            let start = self.offset(x, row);
            let end = self.offset(x_end, row);
            for px in self.data[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    /// Composites `rgb` with coverage `alpha` over the existing pixel.
    pub fn blend_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3], alpha: u8) {
        if x >= self.width || y >= self.height || alpha == 0 {
            return;
        }
        let o = self.offset(x, y);
        let a = u32::from(alpha);
        let dst_a = u32::from(self.data[o + 3]);

        for c in 0..3 {
            let src = u32::from(rgb[c]);
            let dst = u32::from(self.data[o + c]);
            self.data[o + c] = ((src * a + dst * (255 - a) + 127) / 255) as u8;
        }
        // Porter-Duff over for alpha
        self.data[o + 3] = (a + (dst_a * (255 - a) + 127) / 255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let s = Surface::new(4, 3).unwrap();
        assert_eq!((s.width(), s.height()), (4, 3));
        assert_eq!(s.data().len(), 4 * 3 * 4);
        assert_eq!(s.pixel(3, 2), Some([0, 0, 0, 0]));
        assert_eq!(s.pixel(4, 0), None);
    }

    #[test]
    fn test_refuses_bad_sizes() {
        assert!(matches!(Surface::new(0, 10), Err(RenderError::InvalidSurface { .. })));
        assert!(matches!(Surface::new(10, 0), Err(RenderError::InvalidSurface { .. })));
        assert!(matches!(
            Surface::new(20_000, 20_000),
            Err(RenderError::InvalidSurface { .. })
        ));
        assert!(matches!(
            Surface::new(u64::MAX, 2),
            Err(RenderError::InvalidSurface { .. })
        ));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut s = Surface::new(5, 5).unwrap();
        s.fill_rect(3, 3, 10, 10, [1, 2, 3, 255]);
        assert_eq!(s.pixel(4, 4), Some([1, 2, 3, 255]));
        assert_eq!(s.pixel(3, 3), Some([1, 2, 3, 255]));
        assert_eq!(s.pixel(2, 3), Some([0, 0, 0, 0]));

        // Fully outside: no-op
        s.fill_rect(9, 9, 2, 2, [9, 9, 9, 9]);
    }

    #[test]
    fn test_blend_pixel() {
        let mut s = Surface::new(1, 1).unwrap();
        s.fill_rect(0, 0, 1, 1, [0, 0, 0, 255]);
        s.blend_pixel(0, 0, [255, 255, 255], 255);
        assert_eq!(s.pixel(0, 0), Some([255, 255, 255, 255]));

        s.fill_rect(0, 0, 1, 1, [0, 0, 0, 255]);
        s.blend_pixel(0, 0, [255, 255, 255], 128);
        assert_eq!(s.pixel(0, 0), Some([128, 128, 128, 255]));

        s.blend_pixel(0, 0, [0, 0, 0], 0);
        assert_eq!(s.pixel(0, 0), Some([128, 128, 128, 255]));
    }
}
