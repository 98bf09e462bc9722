//! Sepia tone filter.
//!
//! Each output channel is a fixed linear combination of the pixel's original
//! red, green and blue values. Weighted sums can exceed 255 for bright
//! pixels and are clamped.

use crate::error::FilterResult;
use crate::grid::{check_dimensions, Pixel, PixelGrid};

use super::core::{for_each_pixel, round_channel};

/// Sepia weights, one row per output channel (R, G, B), applied to the
/// input (R, G, B).
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Sepia-toned version of a single pixel.
#[inline]
pub fn sepia_tone(pixel: Pixel) -> Pixel {
    let rgb = [
        f64::from(pixel.red),
        f64::from(pixel.green),
        f64::from(pixel.blue),
    ];
    let channel = |w: &[f64; 3]| round_channel(w[0] * rgb[0] + w[1] * rgb[1] + w[2] * rgb[2]);

    Pixel::new(
        channel(&SEPIA_MATRIX[0]),
        channel(&SEPIA_MATRIX[1]),
        channel(&SEPIA_MATRIX[2]),
    )
}

/// Apply the sepia filter to a grid in place.
pub fn sepia(grid: &mut PixelGrid) {
    log::debug!("sepia: {}x{}", grid.height(), grid.width());
    apply(grid.pixels_mut());
}

/// Apply the sepia filter to a raw row-major `height x width` buffer.
///
/// # Errors
/// `InvalidDimensions` if the buffer length does not match; nothing is
/// written in that case.
pub fn sepia_pixels(height: usize, width: usize, pixels: &mut [Pixel]) -> FilterResult<()> {
    check_dimensions(height, width, pixels.len())?;
    log::debug!("sepia: {height}x{width}");
    apply(pixels);
    Ok(())
}

fn apply(pixels: &mut [Pixel]) {
    for_each_pixel(pixels, |p| *p = sepia_tone(*p));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sepia_white_clamps() {
        // R = 344.505 -> 255, G = 306.765 -> 255, B = 238.935 -> 239
        assert_eq!(sepia_tone(Pixel::WHITE), Pixel::new(255, 255, 239));
    }

    #[test]
    fn test_sepia_black_stays_black() {
        assert_eq!(sepia_tone(Pixel::BLACK), Pixel::BLACK);
    }

    #[test]
    fn test_sepia_midtones() {
        // R = 24.98, G = 22.25, B = 17.33
        assert_eq!(sepia_tone(Pixel::new(10, 20, 30)), Pixel::new(25, 22, 17));
        // Pure red: 0.393, 0.349, 0.272 of 200
        assert_eq!(sepia_tone(Pixel::new(200, 0, 0)), Pixel::new(79, 70, 54));
    }

    #[test]
    fn test_sepia_uses_original_values() {
        let mut grid = PixelGrid::filled(2, 2, Pixel::new(10, 20, 30));
        grid[(1, 1)] = Pixel::WHITE;

        sepia(&mut grid);

        assert_eq!(grid[(0, 0)], Pixel::new(25, 22, 17));
        assert_eq!(grid[(0, 1)], Pixel::new(25, 22, 17));
        assert_eq!(grid[(1, 0)], Pixel::new(25, 22, 17));
        assert_eq!(grid[(1, 1)], Pixel::new(255, 255, 239));
    }

    #[test]
    fn test_sepia_pixels_rejects_mismatch() {
        let mut pixels = vec![Pixel::WHITE; 4];
        assert!(sepia_pixels(3, 3, &mut pixels).is_err());
        assert!(pixels.iter().all(|&p| p == Pixel::WHITE));

        assert!(sepia_pixels(2, 2, &mut pixels).is_ok());
        assert!(pixels.iter().all(|&p| p == Pixel::new(255, 255, 239)));
    }
}
