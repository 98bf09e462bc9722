//! WebAssembly exports for the filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images are
//! passed as flat `RGBRGB...` byte buffers (length = width * height * 3)
//! and a new buffer of the same length is returned.

use wasm_bindgen::prelude::*;

use crate::error::FilterError;
use crate::filters::FilterKind;
use crate::grid::PixelGrid;

fn to_js_err(err: FilterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn run(data: &[u8], width: usize, height: usize, kind: FilterKind) -> Result<Vec<u8>, JsValue> {
    let mut grid = PixelGrid::from_rgb_bytes(height, width, data).map_err(to_js_err)?;
    kind.apply(&mut grid).map_err(to_js_err)?;
    Ok(grid.to_rgb_bytes())
}

/// Convert an RGB image to grayscale by channel average.
///
/// # Arguments
/// * `data` - Flat array of RGB bytes (length = width * height * 3)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
#[wasm_bindgen]
pub fn grayscale_rgb_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    run(data, width, height, FilterKind::Grayscale)
}

/// Apply sepia tone to an RGB image.
#[wasm_bindgen]
pub fn sepia_rgb_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    run(data, width, height, FilterKind::Sepia)
}

/// Mirror an RGB image horizontally.
#[wasm_bindgen]
pub fn reflect_rgb_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    run(data, width, height, FilterKind::Reflect)
}

/// 3x3 box blur of an RGB image.
#[wasm_bindgen]
pub fn blur_rgb_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    run(data, width, height, FilterKind::Blur)
}

/// Apply a filter chosen by name or flag ("grayscale", "s", "-b", ...).
#[wasm_bindgen]
pub fn apply_filter_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    filter: &str,
) -> Result<Vec<u8>, JsValue> {
    let kind: FilterKind = filter.parse().map_err(to_js_err)?;
    run(data, width, height, kind)
}
