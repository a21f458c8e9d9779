use std::ffi::OsStr;
use std::path::Path;

use crate::error::{AutofocusError, Result};

/// Extract the frame number encoded in a frame file path.
///
/// Paths follow `<name><number><extension>` where `<number>` is exactly
/// `digits` zero-padded decimal characters placed immediately before the
/// extension, e.g. `frame00042.png` with `digits = 5` gives 42.
///
/// The window is taken by position: `len - extension_len - digits` onwards,
/// where `extension_len` includes the leading dot. It is never searched for.
///
/// Errors:
/// - `InvalidFilename` if the path is not valid Unicode or is not longer than
///   `extension_len + digits` characters.
/// - `FrameNumberParse` if the window holds anything but ASCII digits, or the
///   number overflows `usize`.
pub fn extract_frame_number(path: &Path, digits: usize) -> Result<usize> {
    let full = path
        .to_str()
        .ok_or_else(|| AutofocusError::InvalidFilename(path.to_path_buf()))?;
    let extension_len = path
        .extension()
        .and_then(OsStr::to_str)
        .map_or(0, |ext| ext.chars().count() + 1);

    let chars: Vec<char> = full.chars().collect();
    if chars.len() <= extension_len + digits {
        return Err(AutofocusError::InvalidFilename(path.to_path_buf()));
    }

    let start = chars.len() - extension_len - digits;
    let window = &chars[start..start + digits];

    // `usize::from_str` would also accept a leading '+'.
    if !window.iter().all(char::is_ascii_digit) {
        return Err(AutofocusError::FrameNumberParse(path.to_path_buf()));
    }

    window
        .iter()
        .collect::<String>()
        .parse::<usize>()
        .map_err(|_| AutofocusError::FrameNumberParse(path.to_path_buf()))
}
