pub mod analyze;
pub mod config;

pub use analyze::{analyse_frame, analyse_frames, analyse_frames_with_progress, sharpest};
