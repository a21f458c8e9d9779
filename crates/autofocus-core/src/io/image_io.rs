use std::path::Path;

use image::{ImageReader, RgbImage};
use ndarray::Array2;

use crate::error::{AutofocusError, Result};
use crate::frame::ColorFrame;

/// Decode an image file into an 8-bit `ColorFrame`.
///
/// The format is detected from the file contents, not the extension.
/// Grayscale, 16-bit and alpha sources are converted to 8-bit RGB first.
/// Fails with `ImageLoad` if the file cannot be decoded or has an empty
/// dimension.
pub fn load_color_frame(path: &Path) -> Result<ColorFrame> {
    let load_error = |reason: String| AutofocusError::ImageLoad {
        path: path.to_path_buf(),
        reason,
    };

    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| load_error(e.to_string()))?
        .decode()
        .map_err(|e| load_error(e.to_string()))?;

    color_frame_from_rgb(&img.to_rgb8(), path)
}

/// Split an RGB buffer into channel planes, rejecting empty images.
///
/// `path` is only used to label the error.
pub fn color_frame_from_rgb(rgb: &RgbImage, path: &Path) -> Result<ColorFrame> {
    let (w, h) = rgb.dimensions();
    if w == 0 || h == 0 {
        return Err(AutofocusError::ImageLoad {
            path: path.to_path_buf(),
            reason: format!("empty image ({w}x{h})"),
        });
    }

    let (w, h) = (w as usize, h as usize);
    let mut red = Array2::<u8>::zeros((h, w));
    let mut green = Array2::<u8>::zeros((h, w));
    let mut blue = Array2::<u8>::zeros((h, w));

    for (col, row, pixel) in rgb.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let idx = [row as usize, col as usize];
        red[idx] = r;
        green[idx] = g;
        blue[idx] = b;
    }

    Ok(ColorFrame { red, green, blue })
}
