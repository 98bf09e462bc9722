//! Pixel and pixel-grid types.
//!
//! A [`PixelGrid`] stores `height * width` RGB pixels in a single flat,
//! row-major buffer. Pixel `(row, col)` lives at `row * width + col`.
//!
//! Grids can be built from a pixel vector, a packed RGB byte buffer or an
//! ndarray of shape `(height, width, 3)`, which is the layout the Python and
//! WASM bindings exchange.

use std::ops::{Index, IndexMut};

use ndarray::{Array3, ArrayView3};

use crate::error::{FilterError, FilterResult};
use crate::filters::FilterKind;

/// One RGB pixel, 8 bits per channel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Pixel with all three channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(pixel: Pixel) -> Self {
        pixel.to_array()
    }
}

/// Number of pixels in a `height x width` grid, `None` on overflow.
pub(crate) fn pixel_count(height: usize, width: usize) -> Option<usize> {
    height.checked_mul(width)
}

/// Check that a buffer of `len` pixels is exactly a `height x width` grid.
pub(crate) fn check_dimensions(height: usize, width: usize, len: usize) -> FilterResult<()> {
    match pixel_count(height, width) {
        Some(expected) if expected == len => Ok(()),
        _ => {
            log::warn!("rejecting {height}x{width} grid backed by {len} pixels");
            Err(FilterError::InvalidDimensions { height, width, len })
        }
    }
}

/// Rectangular, row-major RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    height: usize,
    width: usize,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Create a black grid.
    ///
    /// # Panics
    /// If `height * width` overflows `usize`.
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, Pixel::BLACK)
    }

    /// Create a grid with every pixel set to `pixel`.
    ///
    /// # Panics
    /// If `height * width` overflows `usize`.
    pub fn filled(height: usize, width: usize, pixel: Pixel) -> Self {
        let len = pixel_count(height, width).expect("grid size overflow");
        Self {
            height,
            width,
            pixels: vec![pixel; len],
        }
    }

    /// Wrap an existing row-major pixel buffer.
    pub fn from_pixels(height: usize, width: usize, pixels: Vec<Pixel>) -> FilterResult<Self> {
        check_dimensions(height, width, pixels.len())?;
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Build a grid from packed `RGBRGB...` bytes.
    pub fn from_rgb_bytes(height: usize, width: usize, data: &[u8]) -> FilterResult<Self> {
        let expected = pixel_count(height, width)
            .and_then(|n| n.checked_mul(3))
            .ok_or(FilterError::InvalidDimensions {
                height,
                width,
                len: data.len() / 3,
            })?;
        if data.len() != expected {
            return Err(FilterError::BufferLength {
                expected,
                actual: data.len(),
            });
        }

        let pixels = data
            .chunks_exact(3)
            .map(|rgb| Pixel::new(rgb[0], rgb[1], rgb[2]))
            .collect();
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Build a grid from an ndarray of shape `(height, width, 3)`.
    pub fn from_array(input: ArrayView3<u8>) -> FilterResult<Self> {
        let (height, width, channels) = input.dim();
        if channels != 3 {
            return Err(FilterError::UnsupportedChannels(channels));
        }

        let mut pixels = Vec::with_capacity(height * width);
        for y in 0..height {
            for x in 0..width {
                pixels.push(Pixel::new(
                    input[[y, x, 0]],
                    input[[y, x, 1]],
                    input[[y, x, 2]],
                ));
            }
        }
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Copy the grid into an ndarray of shape `(height, width, 3)`.
    pub fn to_array(&self) -> Array3<u8> {
        Array3::from_shape_fn((self.height, self.width, 3), |(y, x, c)| {
            self[(y, x)].to_array()[c]
        })
    }

    /// Packed `RGBRGB...` bytes in row-major order.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_array()).collect()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Flat buffer index of `(row, col)`.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row * self.width + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Pixel> {
        if row < self.height && col < self.width {
            self.pixels.get(self.index(row, col))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Pixel> {
        if row < self.height && col < self.width {
            let i = self.index(row, col);
            self.pixels.get_mut(i)
        } else {
            None
        }
    }

    /// Iterate over rows. A zero-width grid yields no rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Iterate mutably over rows. A zero-width grid yields no rows.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Pixel]> {
        self.pixels.chunks_exact_mut(self.width.max(1))
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Mutable view of the buffer. The slice cannot change length, so the
    /// grid dimensions stay valid.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Run one filter over the grid in place.
    pub fn apply(&mut self, kind: FilterKind) -> FilterResult<()> {
        kind.apply(self)
    }
}

impl Index<(usize, usize)> for PixelGrid {
    type Output = Pixel;

    fn index(&self, (row, col): (usize, usize)) -> &Pixel {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of bounds for {}x{} grid",
            self.height,
            self.width
        );
        &self.pixels[row * self.width + col]
    }
}

impl IndexMut<(usize, usize)> for PixelGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Pixel {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of bounds for {}x{} grid",
            self.height,
            self.width
        );
        &mut self.pixels[row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_index_is_row_major() {
        let grid = PixelGrid::new(3, 4);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(0, 3), 3);
        assert_eq!(grid.index(1, 0), 4);
        assert_eq!(grid.index(2, 3), 11);
    }

    #[test]
    fn test_from_pixels_rejects_wrong_length() {
        let err = PixelGrid::from_pixels(2, 2, vec![Pixel::BLACK; 3]).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidDimensions {
                height: 2,
                width: 2,
                len: 3
            }
        );
    }

    #[test]
    fn test_from_pixels_rejects_overflowing_dimensions() {
        let err = PixelGrid::from_pixels(usize::MAX, 2, Vec::new()).unwrap_err();
        assert!(matches!(err, FilterError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_rgb_bytes_layout() {
        let data = [1, 2, 3, 4, 5, 6];
        let grid = PixelGrid::from_rgb_bytes(1, 2, &data).unwrap();
        assert_eq!(grid[(0, 0)], Pixel::new(1, 2, 3));
        assert_eq!(grid[(0, 1)], Pixel::new(4, 5, 6));
        assert_eq!(grid.to_rgb_bytes(), data);
    }

    #[test]
    fn test_rgb_bytes_wrong_length() {
        let err = PixelGrid::from_rgb_bytes(2, 2, &[0; 11]).unwrap_err();
        assert_eq!(
            err,
            FilterError::BufferLength {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_from_array_matches_indexing() {
        let mut img = Array3::<u8>::zeros((2, 3, 3));
        img[[1, 2, 0]] = 10; // R
        img[[1, 2, 1]] = 20; // G
        img[[1, 2, 2]] = 30; // B

        let grid = PixelGrid::from_array(img.view()).unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid[(1, 2)], Pixel::new(10, 20, 30));
        assert_eq!(grid.to_array(), img);
    }

    #[test]
    fn test_from_array_rejects_rgba() {
        let img = Array3::<u8>::zeros((2, 2, 4));
        assert_eq!(
            PixelGrid::from_array(img.view()).unwrap_err(),
            FilterError::UnsupportedChannels(4)
        );
    }

    #[test]
    fn test_get_out_of_bounds() {
        let mut grid = PixelGrid::new(2, 2);
        assert!(grid.get(2, 0).is_none());
        assert!(grid.get(0, 2).is_none());
        assert!(grid.get_mut(5, 5).is_none());
        *grid.get_mut(1, 1).unwrap() = Pixel::WHITE;
        assert_eq!(grid.get(1, 1), Some(&Pixel::WHITE));
    }

    #[test]
    fn test_rows() {
        let mut grid = PixelGrid::new(3, 2);
        grid[(2, 1)] = Pixel::gray(7);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[Pixel::BLACK, Pixel::gray(7)]);

        let empty = PixelGrid::new(4, 0);
        assert_eq!(empty.rows().count(), 0);
        assert!(empty.is_empty());
    }
}
