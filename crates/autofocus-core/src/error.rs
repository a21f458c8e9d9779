use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutofocusError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("invalid data directory '{}'", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("invalid filename: '{}'", .0.display())]
    InvalidFilename(PathBuf),

    #[error("unable to parse frame number from file '{}'", .0.display())]
    FrameNumberParse(PathBuf),

    #[error("error while opening image '{}': {reason}", .path.display())]
    ImageLoad { path: PathBuf, reason: String },

    #[error("unable to write result file '{}'", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AutofocusError>;
