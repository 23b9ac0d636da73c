mod heuristics;
mod scan;
mod window;

pub use heuristics::{
    default_heuristics, is_button_like, is_image_like, is_link_like, is_textfield_like, is_uniform,
    ButtonHeuristic, ImageHeuristic, LinkHeuristic, RegionHeuristic, TextFieldHeuristic, Window,
    BRIGHT_THRESHOLD, BUTTON_CONFIDENCE, DARK_THRESHOLD, IMAGE_CONFIDENCE, LINK_CONFIDENCE,
    MID_TONE_HIGH, MID_TONE_LOW, SCAN_STEP, TEXTFIELD_CONFIDENCE, UNIFORM_VARIANCE_THRESHOLD,
    WINDOW_HEIGHT, WINDOW_WIDTH,
};
pub use scan::{scan, ScanGrid, ScanInput};
pub use window::{color_variance, mean_intensity, window_stats, WindowStats};

use crate::types::ElementInfo;

/// Run every heuristic over the full grid and concatenate in heuristic order
///
/// Passes never suppress or deduplicate each other's matches.
pub fn classify(
    input: &ScanInput<'_>,
    grid: ScanGrid,
    heuristics: &[&dyn RegionHeuristic],
) -> Vec<ElementInfo> {
    let _span = tracing::debug_span!("classify").entered();

    heuristics
        .iter()
        .flat_map(|heuristic| scan(input, grid, *heuristic))
        .collect()
}
