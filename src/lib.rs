//! rgbfilters
//!
//! Classic bitmap filters over an in-memory RGB pixel grid: grayscale,
//! sepia, horizontal reflection and 3x3 box blur, with optional Python
//! bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! A [`PixelGrid`] holds `height * width` 8-bit RGB pixels in row-major
//! order. No alpha channel and no other bit depths.
//!
//! Bindings exchange images as:
//! - **Python**: numpy `uint8` arrays of shape `(height, width, 3)`
//! - **WASM**: flat `RGBRGB...` byte buffers plus width and height
//!
//! ## Filter Architecture
//! Filters mutate the grid in place and never change its dimensions. Blur
//! works from a private snapshot of the original pixels that is dropped when
//! the call returns.
//!
//! ## Features
//! - `parallel`: process rows on the rayon thread pool
//! - `python`: PyO3 extension module
//! - `wasm`: wasm-bindgen exports

pub mod error;
pub mod filters;
pub mod grid;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{FilterError, FilterResult};
pub use filters::blur::{blur, blur_pixels};
pub use filters::grayscale::{grayscale, grayscale_pixels};
pub use filters::reflect::{reflect, reflect_pixels};
pub use filters::sepia::{sepia, sepia_pixels};
pub use filters::FilterKind;
pub use grid::{Pixel, PixelGrid};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::FilterError;
    use crate::filters::FilterKind;
    use crate::grid::PixelGrid;

    fn to_py_err(err: FilterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    /// Copy the numpy image into a grid, run `kind` and return a new array.
    fn run<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        kind: FilterKind,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut grid = PixelGrid::from_array(image.as_array()).map_err(to_py_err)?;
        kind.apply(&mut grid).map_err(to_py_err)?;
        Ok(grid.to_array().into_pyarray(py))
    }

    /// Convert RGB u8 image (H, W, 3) to grayscale by channel average.
    #[pyfunction]
    #[pyo3(name = "grayscale")]
    pub fn grayscale_py<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, FilterKind::Grayscale)
    }

    /// Apply sepia tone to RGB u8 image (H, W, 3).
    #[pyfunction]
    #[pyo3(name = "sepia")]
    pub fn sepia_py<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, FilterKind::Sepia)
    }

    /// Mirror RGB u8 image (H, W, 3) horizontally.
    #[pyfunction]
    #[pyo3(name = "reflect")]
    pub fn reflect_py<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, FilterKind::Reflect)
    }

    /// 3x3 box blur of RGB u8 image (H, W, 3).
    #[pyfunction]
    #[pyo3(name = "blur")]
    pub fn blur_py<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, FilterKind::Blur)
    }

    /// Apply a filter chosen by name or flag ("grayscale", "s", "-b", ...).
    #[pyfunction]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        filter: &str,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let kind: FilterKind = filter.parse().map_err(to_py_err)?;
        run(py, image, kind)
    }

    #[pymodule]
    pub fn rgbfilters(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(grayscale_py, m)?)?;
        m.add_function(wrap_pyfunction!(sepia_py, m)?)?;
        m.add_function(wrap_pyfunction!(reflect_py, m)?)?;
        m.add_function(wrap_pyfunction!(blur_py, m)?)?;
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::rgbfilters;
