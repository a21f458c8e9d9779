use ndarray::Array2;

/// Sharpness result for a single frame file.
///
/// A higher `sharpness` means a sharper frame. Scores are not normalized and
/// only compare meaningfully against other frames of the same run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInfo {
    /// Frame number parsed from the filename.
    pub number: usize,
    /// Peak Laplacian response of the frame.
    pub sharpness: f64,
}

impl FrameInfo {
    pub fn new(number: usize, sharpness: f64) -> Self {
        Self { number, sharpness }
    }
}

/// 8-bit color image split into channel planes.
/// Each plane is row-major, shape = (height, width).
#[derive(Clone, Debug)]
pub struct ColorFrame {
    pub red: Array2<u8>,
    pub green: Array2<u8>,
    pub blue: Array2<u8>,
}

impl ColorFrame {
    pub fn width(&self) -> usize {
        self.red.ncols()
    }

    pub fn height(&self) -> usize {
        self.red.nrows()
    }

    /// Apply `f` to every channel plane.
    pub fn map_channels(&self, f: impl Fn(&Array2<u8>) -> Array2<u8>) -> Self {
        Self {
            red: f(&self.red),
            green: f(&self.green),
            blue: f(&self.blue),
        }
    }
}
