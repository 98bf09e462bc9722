//! Grayscale conversion filter.
//!
//! Uses the plain channel average, not a luminosity weighting:
//! `gray = round((R + G + B) / 3)`, written back to all three channels.

use crate::error::FilterResult;
use crate::grid::{check_dimensions, Pixel, PixelGrid};

use super::core::{for_each_pixel, round_channel};

/// Average of the three channels, rounded half away from zero.
#[inline]
pub fn average(pixel: Pixel) -> u8 {
    let sum = u16::from(pixel.red) + u16::from(pixel.green) + u16::from(pixel.blue);
    round_channel(f64::from(sum) / 3.0)
}

/// Convert a grid to grayscale in place.
pub fn grayscale(grid: &mut PixelGrid) {
    log::debug!("grayscale: {}x{}", grid.height(), grid.width());
    apply(grid.pixels_mut());
}

/// Convert a raw row-major `height x width` buffer to grayscale in place.
///
/// # Errors
/// `InvalidDimensions` if `pixels` does not hold exactly `height * width`
/// pixels. The buffer is left untouched in that case.
pub fn grayscale_pixels(height: usize, width: usize, pixels: &mut [Pixel]) -> FilterResult<()> {
    check_dimensions(height, width, pixels.len())?;
    log::debug!("grayscale: {height}x{width}");
    apply(pixels);
    Ok(())
}

fn apply(pixels: &mut [Pixel]) {
    for_each_pixel(pixels, |p| *p = Pixel::gray(average(*p)));
}
