//! 3x3 box blur.
//!
//! Every output pixel is the mean of its 3x3 neighbourhood (itself
//! included) in the *original* image. Neighbours outside the grid are
//! skipped rather than padded, so corner pixels average 4 values, edge
//! pixels 6 and interior pixels 9.
//!
//! The original image is captured in a [`Snapshot`] before anything is
//! written. Averaging reads only from the snapshot and writes only to the
//! live buffer, so blurred pixels never feed into later ones.

use crate::error::{FilterError, FilterResult};
use crate::grid::{check_dimensions, Pixel, PixelGrid};

use super::core::{for_each_row, round_channel};

/// `(row_delta, col_delta)` pairs of the 3x3 window.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Read-only copy of a grid, taken before blurring starts.
///
/// Lives only for the duration of one [`blur`] call.
struct Snapshot {
    height: usize,
    width: usize,
    pixels: Box<[Pixel]>,
}

impl Snapshot {
    /// Copy `pixels`, failing without side effects if the copy cannot be
    /// allocated.
    fn take(height: usize, width: usize, pixels: &[Pixel]) -> FilterResult<Self> {
        let mut copy = Vec::new();
        copy.try_reserve_exact(pixels.len())
            .map_err(|_| FilterError::AllocationFailure { height, width })?;
        copy.extend_from_slice(pixels);
        log::trace!("blur: snapshot of {} pixels", copy.len());

        Ok(Self {
            height,
            width,
            pixels: copy.into_boxed_slice(),
        })
    }

    /// Mean of the in-bounds 3x3 window around `(row, col)`.
    fn window_mean(&self, row: usize, col: usize) -> Pixel {
        let mut red = 0.0f32;
        let mut green = 0.0f32;
        let mut blue = 0.0f32;
        let mut count = 0u32;

        for (dy, dx) in NEIGHBOR_OFFSETS {
            let sy = row as isize + dy;
            let sx = col as isize + dx;
            if sy < 0 || sy >= self.height as isize || sx < 0 || sx >= self.width as isize {
                continue;
            }

            let p = self.pixels[sy as usize * self.width + sx as usize];
            red += f32::from(p.red);
            green += f32::from(p.green);
            blue += f32::from(p.blue);
            count += 1;
        }

        // The window always contains the pixel itself.
        let n = count as f32;
        Pixel::new(
            round_channel(f64::from(red / n)),
            round_channel(f64::from(green / n)),
            round_channel(f64::from(blue / n)),
        )
    }
}

/// Box-blur a grid in place.
///
/// # Errors
/// `AllocationFailure` if the snapshot cannot be allocated; the grid is
/// unchanged in that case.
pub fn blur(grid: &mut PixelGrid) -> FilterResult<()> {
    let (height, width) = (grid.height(), grid.width());
    log::debug!("blur: {height}x{width}");
    apply(height, width, grid.pixels_mut())
}

/// Box-blur a raw row-major `height x width` buffer in place.
///
/// # Errors
/// `InvalidDimensions` on a length mismatch, `AllocationFailure` if the
/// snapshot cannot be allocated. The buffer is untouched on error.
pub fn blur_pixels(height: usize, width: usize, pixels: &mut [Pixel]) -> FilterResult<()> {
    check_dimensions(height, width, pixels.len())?;
    log::debug!("blur: {height}x{width}");
    apply(height, width, pixels)
}

fn apply(height: usize, width: usize, pixels: &mut [Pixel]) -> FilterResult<()> {
    if pixels.is_empty() {
        return Ok(());
    }

    // Fully populated before the first write.
    let snapshot = Snapshot::take(height, width, pixels)?;

    for_each_row(width, pixels, |row, out| {
        for (col, p) in out.iter_mut().enumerate() {
            *p = snapshot.window_mean(row, col);
        }
    });

    Ok(())
}
