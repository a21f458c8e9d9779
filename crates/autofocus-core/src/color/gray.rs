use ndarray::Array2;

use crate::consts::{
    LUMINANCE_B_FIXED, LUMINANCE_G_FIXED, LUMINANCE_R_FIXED, LUMINANCE_SHIFT,
};
use crate::frame::ColorFrame;

/// Convert a `ColorFrame` to an 8-bit grayscale plane using ITU-R BT.601 weights.
///
/// Computed in 14-bit fixed point with round-half-up, so the result is exact
/// and matches the usual integer BGR-to-gray conversion.
pub fn to_gray(color: &ColorFrame) -> Array2<u8> {
    let (h, w) = color.red.dim();
    let mut data = Array2::<u8>::zeros((h, w));
    let half = 1u32 << (LUMINANCE_SHIFT - 1);

    for row in 0..h {
        for col in 0..w {
            let y = LUMINANCE_R_FIXED * color.red[[row, col]] as u32
                + LUMINANCE_G_FIXED * color.green[[row, col]] as u32
                + LUMINANCE_B_FIXED * color.blue[[row, col]] as u32;
            data[[row, col]] = ((y + half) >> LUMINANCE_SHIFT).min(u8::MAX as u32) as u8;
        }
    }

    data
}
