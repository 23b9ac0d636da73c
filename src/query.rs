//! Read-only filters over an already detected element set.
//!
//! Every filter preserves input order and returns an empty vector rather
//! than an error when nothing matches.

use crate::geometry::{is_point_in_rectangle, Point};
use crate::types::{ElementInfo, ElementType};

pub fn find_by_type(elements: &[ElementInfo], element_type: ElementType) -> Vec<&ElementInfo> {
    elements
        .iter()
        .filter(|e| e.element_type == element_type)
        .collect()
}

/// Loose text match: any element with non-empty text matches any non-empty
/// search string. Stand-in until real text recognition exists.
pub fn find_by_text<'a>(elements: &'a [ElementInfo], search: &str) -> Vec<&'a ElementInfo> {
    if search.is_empty() {
        return Vec::new();
    }

    elements.iter().filter(|e| !e.text.is_empty()).collect()
}

/// Elements whose window contains `(x, y)` once grown by `tolerance` pixels
pub fn find_by_position(
    elements: &[ElementInfo],
    x: i32,
    y: i32,
    tolerance: u32,
) -> Vec<&ElementInfo> {
    let point = Point::new(x, y);
    elements
        .iter()
        .filter(|e| is_point_in_rectangle(point, &e.rectangle(), tolerance))
        .collect()
}

/// Element count for every type, in pass order, zeros included
pub fn count_by_type(elements: &[ElementInfo]) -> Vec<(ElementType, usize)> {
    ElementType::ALL
        .into_iter()
        .map(|t| (t, elements.iter().filter(|e| e.element_type == t).count()))
        .collect()
}
