use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Visual element detector is disabled")]
    Disabled,

    #[error("Failed to load image from {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write report to {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DetectorError>;
