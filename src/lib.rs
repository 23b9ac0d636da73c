//! Heuristic visual element detection over rendered screenshots.
//!
//! A [`Detector`] grayscales an image, slides a fixed window across it and
//! tags windows that look like buttons, text fields, images or links.
//! The [`query`] functions filter the result and [`report`] writes a
//! plain-text summary.

pub mod classifier;
pub mod config;
pub mod detector;
pub mod error;
pub mod geometry;
pub mod preprocess;
pub mod query;
pub mod report;
pub mod types;

pub use config::DetectorConfig;
pub use detector::Detector;
pub use error::{DetectorError, Result};
pub use geometry::{is_point_in_rectangle, Point, Rectangle, Size};
pub use query::{count_by_type, find_by_position, find_by_text, find_by_type};
pub use report::{generate_visual_report, REPORT_FILE_NAME};
pub use types::{Attributes, ElementInfo, ElementType};
