/// Number of zero-padded digits holding the frame number in a filename,
/// matching `ffmpeg -i <video> frame%05d.png`.
pub const DEFAULT_FRAME_NUMBER_DIGITS: usize = 5;

/// ITU-R BT.601 luminance weights (0.299, 0.587, 0.114) in 14-bit fixed point (sum = 1 << 14).
pub const LUMINANCE_R_FIXED: u32 = 4899;
pub const LUMINANCE_G_FIXED: u32 = 9617;
pub const LUMINANCE_B_FIXED: u32 = 1868;

/// Right shift normalizing the fixed-point luminance weights.
pub const LUMINANCE_SHIFT: u32 = 14;

/// 3-tap Gaussian kernel for sigma = 0, as integer weights: [1, 2, 1] / 4.
pub const GAUSSIAN_3_KERNEL: [u32; 3] = [1, 2, 1];

/// Right shift normalizing the separable 3x3 Gaussian (sum of weights = 16).
pub const GAUSSIAN_3_SHIFT: u32 = 4;

/// Laplacian kernel for aperture size 3:
///   2  0  2
///   0 -8  0
///   2  0  2
pub const LAPLACIAN_3_KERNEL: [[i32; 3]; 3] = [[2, 0, 2], [0, -8, 0], [2, 0, 2]];
