use crate::preprocess::IntensityMap;

/// Local statistics of one in-bounds, non-empty window
///
/// Only [`window_stats`] builds these, so holding one proves the window was
/// readable. Heuristics take `&WindowStats` and never see out-of-bounds data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats {
    pub mean: f64,
    pub variance: f64,
}

pub fn window_stats(
    map: &IntensityMap,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Option<WindowStats> {
    let view = map.window(x, y, width, height)?;
    if view.is_empty() {
        return None;
    }

    let n = view.len() as f64;
    let mean = view.iter().map(|&v| f64::from(v)).sum::<f64>() / n;
    let variance = view
        .iter()
        .map(|&v| {
            let d = f64::from(v) - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    Some(WindowStats { mean, variance })
}

/// Average intensity of the window, `None` if it leaves the map
pub fn mean_intensity(map: &IntensityMap, x: u32, y: u32, width: u32, height: u32) -> Option<f64> {
    window_stats(map, x, y, width, height).map(|s| s.mean)
}

/// Mean squared deviation from the window mean
///
/// Out-of-bounds windows report `0.0`, indistinguishable from a uniform
/// window. Callers that classify must go through [`window_stats`] instead.
pub fn color_variance(map: &IntensityMap, x: u32, y: u32, width: u32, height: u32) -> f64 {
    window_stats(map, x, y, width, height).map_or(0.0, |s| s.variance)
}
