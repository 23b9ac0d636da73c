use super::window::WindowStats;
use crate::geometry::{Point, Size};
use crate::types::{Attributes, ElementType};
use std::path::Path;

pub const WINDOW_WIDTH: u32 = 20;
pub const WINDOW_HEIGHT: u32 = 20;
pub const SCAN_STEP: u32 = 20;

/// Windows darker than this (exclusive) may be buttons
pub const DARK_THRESHOLD: f64 = 80.0;
/// Windows brighter than this (exclusive) may be text fields
pub const BRIGHT_THRESHOLD: f64 = 200.0;
/// Inclusive mid-tone band for links; sits strictly between dark and bright
pub const MID_TONE_LOW: f64 = 100.0;
pub const MID_TONE_HIGH: f64 = 170.0;

/// Variance below this counts as uniform, at or above it as busy image content
///
/// Sits under the variance of a one-step diagonal gradient (66.5 over 20x20),
/// so every in-bounds window is either uniform or image-like.
pub const UNIFORM_VARIANCE_THRESHOLD: f64 = 50.0;

pub const BUTTON_CONFIDENCE: f32 = 0.7;
pub const TEXTFIELD_CONFIDENCE: f32 = 0.6;
pub const IMAGE_CONFIDENCE: f32 = 0.8;
pub const LINK_CONFIDENCE: f32 = 0.5;

// The uniform bands must not overlap.
const _: () = assert!(DARK_THRESHOLD < MID_TONE_LOW);
const _: () = assert!(MID_TONE_LOW <= MID_TONE_HIGH);
const _: () = assert!(MID_TONE_HIGH < BRIGHT_THRESHOLD);

pub fn is_uniform(stats: &WindowStats) -> bool {
    stats.variance < UNIFORM_VARIANCE_THRESHOLD
}

pub fn is_button_like(stats: &WindowStats) -> bool {
    stats.mean < DARK_THRESHOLD && is_uniform(stats)
}

pub fn is_textfield_like(stats: &WindowStats) -> bool {
    stats.mean > BRIGHT_THRESHOLD && is_uniform(stats)
}

pub fn is_image_like(stats: &WindowStats) -> bool {
    !is_uniform(stats)
}

pub fn is_link_like(stats: &WindowStats) -> bool {
    (MID_TONE_LOW..=MID_TONE_HIGH).contains(&stats.mean) && is_uniform(stats)
}

/// The window being classified, with enough context to build attributes
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    pub origin: Point,
    pub size: Size,
    /// File the pixels came from, if any
    pub source: Option<&'a Path>,
}

/// One classifier pass: a predicate over window statistics plus the
/// attributes attached to every match
///
/// Swapping in a different detection strategy means implementing this
/// trait; the scan loop stays the same.
pub trait RegionHeuristic {
    fn element_type(&self) -> ElementType;

    /// Fixed confidence reported for every match of this pass
    fn confidence(&self) -> f32;

    fn matches(&self, stats: &WindowStats) -> bool;

    fn attributes(&self, window: &Window<'_>) -> Attributes;

    /// Attributes for a matching window, `None` otherwise
    fn classify(&self, stats: &WindowStats, window: &Window<'_>) -> Option<Attributes> {
        self.matches(stats).then(|| self.attributes(window))
    }
}

fn attrs<const N: usize>(pairs: [(&str, String); N]) -> Attributes {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

pub struct ButtonHeuristic;

impl RegionHeuristic for ButtonHeuristic {
    fn element_type(&self) -> ElementType {
        ElementType::Button
    }

    fn confidence(&self) -> f32 {
        BUTTON_CONFIDENCE
    }

    fn matches(&self, stats: &WindowStats) -> bool {
        is_button_like(stats)
    }

    fn attributes(&self, _window: &Window<'_>) -> Attributes {
        attrs([("clickable", "true".to_string())])
    }
}

pub struct TextFieldHeuristic;

impl RegionHeuristic for TextFieldHeuristic {
    fn element_type(&self) -> ElementType {
        ElementType::TextField
    }

    fn confidence(&self) -> f32 {
        TEXTFIELD_CONFIDENCE
    }

    fn matches(&self, stats: &WindowStats) -> bool {
        is_textfield_like(stats)
    }

    fn attributes(&self, _window: &Window<'_>) -> Attributes {
        attrs([("input", "true".to_string()), ("type", "text".to_string())])
    }
}

pub struct ImageHeuristic;

impl ImageHeuristic {
    /// `shot.png#xywh=x,y,w,h` when the source file is known,
    /// `image_<x>_<y>` otherwise
    pub fn derive_src(window: &Window<'_>) -> String {
        let Point { x, y } = window.origin;
        match window.source.and_then(Path::file_name) {
            Some(name) => format!(
                "{}#xywh={},{},{},{}",
                name.to_string_lossy(),
                x,
                y,
                window.size.width,
                window.size.height
            ),
            None => format!("image_{}_{}", x, y),
        }
    }
}

impl RegionHeuristic for ImageHeuristic {
    fn element_type(&self) -> ElementType {
        ElementType::Image
    }

    fn confidence(&self) -> f32 {
        IMAGE_CONFIDENCE
    }

    fn matches(&self, stats: &WindowStats) -> bool {
        is_image_like(stats)
    }

    fn attributes(&self, window: &Window<'_>) -> Attributes {
        attrs([("src", Self::derive_src(window))])
    }
}

pub struct LinkHeuristic;

impl RegionHeuristic for LinkHeuristic {
    fn element_type(&self) -> ElementType {
        ElementType::Link
    }

    fn confidence(&self) -> f32 {
        LINK_CONFIDENCE
    }

    fn matches(&self, stats: &WindowStats) -> bool {
        is_link_like(stats)
    }

    fn attributes(&self, _window: &Window<'_>) -> Attributes {
        attrs([("href", "#".to_string()), ("clickable", "true".to_string())])
    }
}

/// All passes in their fixed output order
pub fn default_heuristics() -> [&'static dyn RegionHeuristic; 4] {
    [&ButtonHeuristic, &TextFieldHeuristic, &ImageHeuristic, &LinkHeuristic]
}
