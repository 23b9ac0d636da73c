use super::heuristics::{RegionHeuristic, Window};
use super::window::window_stats;
use crate::geometry::{Point, Size};
use crate::preprocess::{sample_canonical, IntensityMap, PixelBuffer};
use crate::types::ElementInfo;
use std::path::Path;

/// Sampling window extent and the spacing between window origins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanGrid {
    pub window: Size,
    pub step: u32,
}

impl ScanGrid {
    pub fn new(window: Size, step: u32) -> Self {
        Self { window, step }
    }

    /// Window origins in row-major order
    ///
    /// Origins cover the whole image; windows that would overhang the
    /// right or bottom edge are dropped later by the bounds check.
    pub fn origins(&self, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
        let step = self.step.max(1) as usize;
        (0..height)
            .step_by(step)
            .flat_map(move |y| (0..width).step_by(step).map(move |x| (x, y)))
    }
}

/// Everything a pass reads; shared read-only between passes
pub struct ScanInput<'a> {
    pub intensity: &'a IntensityMap,
    pub pixels: &'a PixelBuffer,
    pub source: Option<&'a Path>,
}

/// Run one heuristic over every grid window and collect the matches
pub fn scan(
    input: &ScanInput<'_>,
    grid: ScanGrid,
    heuristic: &dyn RegionHeuristic,
) -> Vec<ElementInfo> {
    let element_type = heuristic.element_type();
    let _span = tracing::debug_span!("scan", pass = %element_type).entered();

    let (width, height) = input.intensity.dimensions();
    let Size { width: w, height: h } = grid.window;
    let mut found = Vec::new();
    let mut skipped = 0usize;

    for (x, y) in grid.origins(width, height) {
        let Some(stats) = window_stats(input.intensity, x, y, w, h) else {
            skipped += 1;
            continue;
        };

        let window = Window {
            origin: Point::new(x as i32, y as i32),
            size: grid.window,
            source: input.source,
        };
        let Some(mut attributes) = heuristic.classify(&stats, &window) else {
            continue;
        };

        if let Some(color) = sample_canonical(input.pixels, x + w / 2, y + h / 2) {
            attributes.insert("color".to_string(), color.to_string());
        }

        found.push(
            ElementInfo::new(element_type, window.origin, window.size, heuristic.confidence())
                .with_attributes(attributes),
        );
    }

    tracing::debug!(
        "{} pass: {} matches, {} windows out of bounds",
        element_type,
        found.len(),
        skipped
    );

    found
}
