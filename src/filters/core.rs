//! Core utilities shared by the filters:
//! - Channel rounding and clamping
//! - Row iteration (sequential, or rayon-parallel with the `parallel` feature)

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::grid::Pixel;

/// Round half away from zero, clamp to 0-255 and narrow to a channel value.
#[inline]
pub fn round_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Call `f(row_index, row)` for every row of a row-major buffer.
///
/// Rows share no data, so with the `parallel` feature they are handed out
/// to the rayon pool. Does nothing for a zero-width buffer.
pub(crate) fn for_each_row<F>(width: usize, pixels: &mut [Pixel], f: F)
where
    F: Fn(usize, &mut [Pixel]) + Send + Sync,
{
    if width == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    pixels
        .par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(row, px)| f(row, px));

    #[cfg(not(feature = "parallel"))]
    pixels
        .chunks_exact_mut(width)
        .enumerate()
        .for_each(|(row, px)| f(row, px));
}

/// Apply `f` to every pixel independently.
pub(crate) fn for_each_pixel<F>(pixels: &mut [Pixel], f: F)
where
    F: Fn(&mut Pixel) + Send + Sync,
{
    #[cfg(feature = "parallel")]
    pixels.par_iter_mut().for_each(f);

    #[cfg(not(feature = "parallel"))]
    pixels.iter_mut().for_each(f);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_channel(42.5), 43);
        assert_eq!(round_channel(42.49), 42);
        assert_eq!(round_channel(63.75), 64);
        assert_eq!(round_channel(0.5), 1);
    }

    #[test]
    fn test_round_channel_clamps() {
        assert_eq!(round_channel(344.505), 255);
        assert_eq!(round_channel(255.4), 255);
        assert_eq!(round_channel(-3.0), 0);
    }

    #[test]
    fn test_for_each_row_indices() {
        let mut pixels = vec![Pixel::BLACK; 6];
        for_each_row(2, &mut pixels, |row, px| {
            for p in px.iter_mut() {
                *p = Pixel::gray(row as u8);
            }
        });
        let rows: Vec<u8> = pixels.iter().map(|p| p.red).collect();
        assert_eq!(rows, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_for_each_row_zero_width() {
        let mut pixels: Vec<Pixel> = Vec::new();
        for_each_row(0, &mut pixels, |_, _| panic!("no rows expected"));
    }
}
