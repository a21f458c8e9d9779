use ndarray::Array2;

use crate::consts::{GAUSSIAN_3_KERNEL, GAUSSIAN_3_SHIFT};
use crate::frame::ColorFrame;

/// Apply the 3x3 Gaussian blur to every channel of a color frame.
pub fn gaussian_blur_3x3(frame: &ColorFrame) -> ColorFrame {
    frame.map_channels(gaussian_blur_3x3_array)
}

/// Apply the 3x3 Gaussian blur (sigma = 0 kernel) to an 8-bit plane.
///
/// Separable [1 2 1] passes are accumulated in integers and rounded once at
/// the end, so the result is exact and platform independent. Pixels outside
/// the plane are mirrored without repeating the edge (`gfedcb|abcdefgh|gfedcba`).
pub fn gaussian_blur_3x3_array(data: &Array2<u8>) -> Array2<u8> {
    let row_pass = convolve_rows(data, &GAUSSIAN_3_KERNEL);
    let cols = convolve_cols(&row_pass, &GAUSSIAN_3_KERNEL);
    let half = 1u32 << (GAUSSIAN_3_SHIFT - 1);
    cols.mapv(|v| ((v + half) >> GAUSSIAN_3_SHIFT).min(u8::MAX as u32) as u8)
}

fn convolve_rows(data: &Array2<u8>, kernel: &[u32]) -> Array2<u32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let mut result = Array2::<u32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let mut sum = 0u32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_col = reflect_101(col as isize + ki as isize - radius as isize, w);
                sum += data[[row, src_col]] as u32 * kv;
            }
            result[[row, col]] = sum;
        }
    }
    result
}

fn convolve_cols(data: &Array2<u32>, kernel: &[u32]) -> Array2<u32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let mut result = Array2::<u32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let mut sum = 0u32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_row = reflect_101(row as isize + ki as isize - radius as isize, h);
                sum += data[[src_row, col]] * kv;
            }
            result[[row, col]] = sum;
        }
    }
    result
}

/// Map an index one step outside `0..len` back inside by mirroring about the
/// edge pixel.
fn reflect_101(i: isize, len: usize) -> usize {
    let last = len as isize - 1;
    if last == 0 {
        return 0;
    }
    if i < 0 {
        (-i).min(last) as usize
    } else if i > last {
        (2 * last - i).max(0) as usize
    } else {
        i as usize
    }
}
