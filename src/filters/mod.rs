//! The four filters and their dispatcher.
//!
//! | Filter | Kind | Flag |
//! |--------|------|------|
//! | [`grayscale`](grayscale::grayscale) | per pixel | `g` |
//! | [`sepia`](sepia::sepia) | per pixel | `s` |
//! | [`reflect`](reflect::reflect) | per row | `r` |
//! | [`blur`](blur::blur) | 3x3 neighbourhood | `b` |
//!
//! Every filter mutates the grid in place and preserves its dimensions.
//! Each comes in two forms: one taking a [`PixelGrid`], which is valid by
//! construction, and a `*_pixels` form taking `(height, width, &mut [Pixel])`
//! that validates the buffer length before touching it.
//!
//! Channel arithmetic is done in floating point and rounded half away from
//! zero before clamping to 0-255.

use std::fmt;
use std::str::FromStr;

use crate::error::{FilterError, FilterResult};
use crate::grid::{Pixel, PixelGrid};

pub mod core;
pub mod grayscale;
pub mod sepia;
pub mod reflect;
pub mod blur;

/// Selects one of the filters at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Grayscale,
    Sepia,
    Reflect,
    Blur,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Grayscale,
        FilterKind::Sepia,
        FilterKind::Reflect,
        FilterKind::Blur,
    ];

    /// Look up a filter by its single-letter flag (`g`, `s`, `r`, `b`).
    pub fn from_flag(flag: char) -> Option<Self> {
        match flag.to_ascii_lowercase() {
            'g' => Some(Self::Grayscale),
            's' => Some(Self::Sepia),
            'r' => Some(Self::Reflect),
            'b' => Some(Self::Blur),
            _ => None,
        }
    }

    pub fn flag(self) -> char {
        match self {
            Self::Grayscale => 'g',
            Self::Sepia => 's',
            Self::Reflect => 'r',
            Self::Blur => 'b',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
            Self::Reflect => "reflect",
            Self::Blur => "blur",
        }
    }

    /// Run this filter on a grid in place.
    pub fn apply(self, grid: &mut PixelGrid) -> FilterResult<()> {
        match self {
            Self::Grayscale => grayscale::grayscale(grid),
            Self::Sepia => sepia::sepia(grid),
            Self::Reflect => reflect::reflect(grid),
            Self::Blur => blur::blur(grid)?,
        }
        Ok(())
    }

    /// Run this filter on a raw row-major `height x width` buffer.
    pub fn apply_pixels(self, height: usize, width: usize, pixels: &mut [Pixel]) -> FilterResult<()> {
        match self {
            Self::Grayscale => grayscale::grayscale_pixels(height, width, pixels),
            Self::Sepia => sepia::sepia_pixels(height, width, pixels),
            Self::Reflect => reflect::reflect_pixels(height, width, pixels),
            Self::Blur => blur::blur_pixels(height, width, pixels),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    /// Accepts a full name (`"sepia"`) or a flag (`"s"`, `"-s"`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().trim_start_matches('-').to_ascii_lowercase();

        let mut chars = key.chars();
        if let (Some(flag), None) = (chars.next(), chars.next()) {
            if let Some(kind) = Self::from_flag(flag) {
                return Ok(kind);
            }
        }

        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == key)
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_flags() {
        assert_eq!("grayscale".parse::<FilterKind>(), Ok(FilterKind::Grayscale));
        assert_eq!("Sepia".parse::<FilterKind>(), Ok(FilterKind::Sepia));
        assert_eq!("-r".parse::<FilterKind>(), Ok(FilterKind::Reflect));
        assert_eq!("b".parse::<FilterKind>(), Ok(FilterKind::Blur));
        assert_eq!(
            "emboss".parse::<FilterKind>(),
            Err(FilterError::UnknownFilter("emboss".to_string()))
        );
        assert!("".parse::<FilterKind>().is_err());
        assert!("x".parse::<FilterKind>().is_err());
    }

    #[test]
    fn test_flag_roundtrip() {
        for kind in FilterKind::ALL {
            assert_eq!(FilterKind::from_flag(kind.flag()), Some(kind));
            assert_eq!(kind.to_string().parse::<FilterKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_apply_dispatches() {
        let mut grid = PixelGrid::new(1, 2);
        grid[(0, 0)] = Pixel::new(30, 60, 90);

        FilterKind::Reflect.apply(&mut grid).unwrap();
        assert_eq!(grid[(0, 1)], Pixel::new(30, 60, 90));

        FilterKind::Grayscale.apply(&mut grid).unwrap();
        assert_eq!(grid[(0, 1)], Pixel::gray(60));
    }

    #[test]
    fn test_apply_pixels_validates() {
        let mut pixels = vec![Pixel::WHITE; 3];
        for kind in FilterKind::ALL {
            assert!(matches!(
                kind.apply_pixels(2, 2, &mut pixels),
                Err(FilterError::InvalidDimensions { .. })
            ));
        }
        assert!(pixels.iter().all(|&p| p == Pixel::WHITE));
    }
}
