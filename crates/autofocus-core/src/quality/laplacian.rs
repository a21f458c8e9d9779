use std::path::Path;

use ndarray::Array2;

use crate::color::gray::to_gray;
use crate::consts::LAPLACIAN_3_KERNEL;
use crate::error::Result;
use crate::filters::gaussian_blur::gaussian_blur_3x3;
use crate::frame::ColorFrame;
use crate::io::image_io::load_color_frame;

/// Result of a combined min/max scan over a grid.
/// Locations are `(row, col)` of the first occurrence in row-major order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremum {
    pub min_value: f64,
    pub max_value: f64,
    pub min_loc: (usize, usize),
    pub max_loc: (usize, usize),
}

/// Compute the sharpness of the image at `path`.
///
/// Decodes the file, then runs [`sharpness`] on it. Fails with `ImageLoad`
/// when the file cannot be decoded or is empty.
pub fn calculate_sharpness(path: &Path) -> Result<f64> {
    let frame = load_color_frame(path)?;
    Ok(sharpness(&frame))
}

/// Peak Laplacian response of a color frame — higher means sharper.
///
/// 3x3 Gaussian blur to suppress noise, BT.601 grayscale, aperture-3
/// Laplacian, then the maximum of the response.
pub fn sharpness(frame: &ColorFrame) -> f64 {
    let blurred = gaussian_blur_3x3(frame);
    let gray = to_gray(&blurred);
    let response = laplacian_response(&gray);
    min_max_loc(&response).map_or(0.0, |e| e.max_value)
}

/// Convolve an 8-bit plane with the aperture-3 Laplacian:
///   2  0  2
///   0 -8  0
///   2  0  2
///
/// Sums are accumulated in `i32` and saturated into `i16`. Pixels outside the
/// plane replicate the nearest edge pixel.
pub fn laplacian_response(data: &Array2<u8>) -> Array2<i16> {
    let (h, w) = data.dim();
    let mut result = Array2::<i16>::zeros((h, w));
    if h == 0 || w == 0 {
        return result;
    }

    for row in 0..h {
        for col in 0..w {
            let mut sum = 0i32;
            for (ki, kernel_row) in LAPLACIAN_3_KERNEL.iter().enumerate() {
                let src_row = (row as isize + ki as isize - 1).clamp(0, h as isize - 1) as usize;
                for (kj, &kv) in kernel_row.iter().enumerate() {
                    if kv == 0 {
                        continue;
                    }
                    let src_col =
                        (col as isize + kj as isize - 1).clamp(0, w as isize - 1) as usize;
                    sum += kv * data[[src_row, src_col]] as i32;
                }
            }
            result[[row, col]] = sum.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        }
    }

    result
}

/// Single pass over `data` finding both extremes and where they occur.
///
/// Returns `None` for an empty grid.
pub fn min_max_loc(data: &Array2<i16>) -> Option<Extremum> {
    let mut iter = data.indexed_iter();
    let (first_loc, &first) = iter.next()?;

    let (mut min_value, mut max_value) = (first, first);
    let (mut min_loc, mut max_loc) = (first_loc, first_loc);

    for (loc, &v) in iter {
        if v < min_value {
            min_value = v;
            min_loc = loc;
        }
        if v > max_value {
            max_value = v;
            max_loc = loc;
        }
    }

    Some(Extremum {
        min_value: min_value as f64,
        max_value: max_value as f64,
        min_loc,
        max_loc,
    })
}
