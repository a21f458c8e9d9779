use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::Array2;

use autofocus_core::frame::ColorFrame;

/// Side length of the synthetic dot images.
pub const DOT_SIZE: u32 = 7;

/// Black square image with a single pixel of `value` in the centre.
///
/// After the 3x3 blur and aperture-3 Laplacian the peak response is known
/// exactly: 255 -> 64, 128 -> 32, 64 -> 16.
pub fn dot_image(value: u8) -> GrayImage {
    let c = DOT_SIZE / 2;
    GrayImage::from_fn(DOT_SIZE, DOT_SIZE, |x, y| {
        if x == c && y == c {
            Luma([value])
        } else {
            Luma([0])
        }
    })
}

/// Black/white checkerboard with square cells of `cell` pixels.
pub fn checkerboard(size: u32, cell: u32) -> GrayImage {
    GrayImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

pub fn solid(size: u32, value: u8) -> GrayImage {
    GrayImage::from_pixel(size, size, Luma([value]))
}

/// Save `img` as PNG under `dir/name`.
pub fn write_png(dir: &Path, name: &str, img: &GrayImage) {
    img.save(dir.join(name)).expect("write PNG frame");
}

/// Color frame with identical channels.
pub fn gray_color_frame(data: Array2<u8>) -> ColorFrame {
    ColorFrame {
        red: data.clone(),
        green: data.clone(),
        blue: data,
    }
}
