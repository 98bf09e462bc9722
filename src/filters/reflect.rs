//! Horizontal reflection (mirror around the vertical axis).
//!
//! Each row is reversed in place by swapping column `j` with
//! `width - 1 - j`. For odd widths the middle column has no partner and
//! stays put. Reflecting twice restores the original grid.

use crate::error::FilterResult;
use crate::grid::{check_dimensions, Pixel, PixelGrid};

use super::core::for_each_row;

/// Mirror a grid horizontally in place.
pub fn reflect(grid: &mut PixelGrid) {
    log::debug!("reflect: {}x{}", grid.height(), grid.width());
    let width = grid.width();
    apply(width, grid.pixels_mut());
}

/// Mirror a raw row-major `height x width` buffer horizontally.
///
/// # Errors
/// `InvalidDimensions` if the buffer length does not match.
pub fn reflect_pixels(height: usize, width: usize, pixels: &mut [Pixel]) -> FilterResult<()> {
    check_dimensions(height, width, pixels.len())?;
    log::debug!("reflect: {height}x{width}");
    apply(width, pixels);
    Ok(())
}

fn apply(width: usize, pixels: &mut [Pixel]) {
    for_each_row(width, pixels, |_, row| {
        for j in 0..width / 2 {
            row.swap(j, width - 1 - j);
        }
    });
}
