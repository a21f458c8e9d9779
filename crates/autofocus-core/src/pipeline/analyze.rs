use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{AutofocusError, Result};
use crate::frame::FrameInfo;
use crate::io::naming::extract_frame_number;
use crate::pipeline::config::AnalysisConfig;
use crate::quality::laplacian::calculate_sharpness;

/// Parse the frame number from `path` and score the image it holds.
pub fn analyse_frame(path: &Path, config: &AnalysisConfig) -> Result<FrameInfo> {
    let number = extract_frame_number(path, config.frame_number_digits)?;
    let sharpness = calculate_sharpness(path)?;
    debug!(path = %path.display(), number, sharpness, "Frame scored");
    Ok(FrameInfo::new(number, sharpness))
}

/// Analyse every entry of `directory` and return the frames sorted by number.
///
/// The first entry that fails to parse or decode aborts the whole analysis.
/// Frames sharing a number are all kept, in directory listing order.
pub fn analyse_frames(directory: &Path, config: &AnalysisConfig) -> Result<Vec<FrameInfo>> {
    analyse_frames_with_progress(directory, config, |_, _| {})
}

/// Same as [`analyse_frames`], calling `on_progress(done, total)` after each
/// frame is scored.
pub fn analyse_frames_with_progress(
    directory: &Path,
    config: &AnalysisConfig,
    on_progress: impl Fn(usize, usize),
) -> Result<Vec<FrameInfo>> {
    config.validate()?;
    if !directory.is_dir() {
        return Err(AutofocusError::InvalidDirectory(directory.to_path_buf()));
    }

    // Listing order is unspecified; the result is sorted below.
    let entries: Vec<PathBuf> = std::fs::read_dir(directory)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    let total = entries.len();

    let mut frames = Vec::with_capacity(total);
    for (i, path) in entries.iter().enumerate() {
        frames.push(analyse_frame(path, config)?);
        on_progress(i + 1, total);
    }

    frames.sort_by_key(|f| f.number);

    info!(frames = frames.len(), directory = %directory.display(), "Frame analysis complete");
    Ok(frames)
}

/// Frame with the highest sharpness. Ties go to the lowest frame number
/// when `frames` is sorted by number.
pub fn sharpest(frames: &[FrameInfo]) -> Option<&FrameInfo> {
    frames.iter().reduce(|best, f| {
        if f.sharpness.total_cmp(&best.sharpness).is_gt() {
            f
        } else {
            best
        }
    })
}
