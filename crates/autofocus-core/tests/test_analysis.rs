#[allow(dead_code)]
mod common;

use std::cell::RefCell;

use autofocus_core::error::AutofocusError;
use autofocus_core::frame::FrameInfo;
use autofocus_core::pipeline::config::AnalysisConfig;
use autofocus_core::pipeline::{analyse_frame, analyse_frames, analyse_frames_with_progress, sharpest};

#[test]
fn test_frames_sorted_with_known_sharpness() {
    let dir = tempfile::tempdir().unwrap();
    // Written out of order; listing order is unspecified anyway.
    common::write_png(dir.path(), "frame00010.png", &common::dot_image(64));
    common::write_png(dir.path(), "frame00002.png", &common::dot_image(255));
    common::write_png(dir.path(), "frame00003.png", &common::solid(8, 90));
    common::write_png(dir.path(), "frame00001.png", &common::dot_image(128));

    let frames = analyse_frames(dir.path(), &AnalysisConfig::default()).unwrap();

    assert_eq!(
        frames,
        vec![
            FrameInfo::new(1, 32.0),
            FrameInfo::new(2, 64.0),
            FrameInfo::new(3, 0.0),
            FrameInfo::new(10, 16.0),
        ]
    );
}

#[test]
fn test_empty_directory_gives_no_frames() {
    let dir = tempfile::tempdir().unwrap();
    let frames = analyse_frames(dir.path(), &AnalysisConfig::default()).unwrap();
    assert!(frames.is_empty());
}

#[test]
fn test_missing_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = analyse_frames(&missing, &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, AutofocusError::InvalidDirectory(ref p) if *p == missing));
    assert!(err.to_string().contains("nope"));
}

#[test]
fn test_file_is_not_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    common::write_png(dir.path(), "frame00001.png", &common::solid(4, 0));
    let err = analyse_frames(&dir.path().join("frame00001.png"), &AnalysisConfig::default())
        .unwrap_err();
    assert!(matches!(err, AutofocusError::InvalidDirectory(_)));
}

#[test]
fn test_bad_filename_aborts_analysis() {
    let dir = tempfile::tempdir().unwrap();
    common::write_png(dir.path(), "frame00001.png", &common::dot_image(255));
    common::write_png(dir.path(), "x.png", &common::dot_image(255));

    let err = analyse_frames(dir.path(), &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, AutofocusError::InvalidFilename(_)));
}

#[test]
fn test_undecodable_frame_aborts_analysis() {
    let dir = tempfile::tempdir().unwrap();
    common::write_png(dir.path(), "frame00001.png", &common::dot_image(255));
    std::fs::write(dir.path().join("frame00002.png"), b"truncated").unwrap();

    let err = analyse_frames(dir.path(), &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, AutofocusError::ImageLoad { .. }));
}

#[test]
fn test_duplicate_numbers_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    common::write_png(dir.path(), "left00001.png", &common::dot_image(255));
    common::write_png(dir.path(), "right00001.png", &common::dot_image(64));
    common::write_png(dir.path(), "left00000.png", &common::dot_image(128));

    let frames = analyse_frames(dir.path(), &AnalysisConfig::default()).unwrap();
    let numbers: Vec<usize> = frames.iter().map(|f| f.number).collect();
    assert_eq!(numbers, vec![0, 1, 1]);
}

#[test]
fn test_progress_reports_every_frame() {
    let dir = tempfile::tempdir().unwrap();
    for i in 1..=3 {
        common::write_png(dir.path(), &format!("frame{i:05}.png"), &common::dot_image(255));
    }

    let calls = RefCell::new(Vec::new());
    let frames =
        analyse_frames_with_progress(dir.path(), &AnalysisConfig::default(), |done, total| {
            calls.borrow_mut().push((done, total));
        })
        .unwrap();

    assert_eq!(frames.len(), 3);
    assert_eq!(calls.into_inner(), vec![(1, 3), (2, 3), (3, 3)]);
}

#[test]
fn test_custom_digit_width() {
    let dir = tempfile::tempdir().unwrap();
    common::write_png(dir.path(), "img042.png", &common::dot_image(128));
    let config = AnalysisConfig {
        frame_number_digits: 3,
    };

    let frame = analyse_frame(&dir.path().join("img042.png"), &config).unwrap();
    assert_eq!(frame, FrameInfo::new(42, 32.0));
}

#[test]
fn test_zero_digit_width_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = AnalysisConfig {
        frame_number_digits: 0,
    };
    let err = analyse_frames(dir.path(), &config).unwrap_err();
    assert!(matches!(err, AutofocusError::InvalidArguments(_)));
}

#[test]
fn test_sharpest_prefers_lowest_number_on_ties() {
    let frames = vec![
        FrameInfo::new(1, 10.0),
        FrameInfo::new(2, 64.0),
        FrameInfo::new(3, 64.0),
        FrameInfo::new(4, 0.0),
    ];
    assert_eq!(sharpest(&frames), Some(&FrameInfo::new(2, 64.0)));
    assert_eq!(sharpest(&[]), None);
}
