use crate::error::{DetectorError, Result};
use crate::query::count_by_type;
use crate::types::ElementInfo;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const REPORT_FILE_NAME: &str = "visual_elements_report.txt";

pub const REPORT_TITLE: &str = "Visual Element Detection Report";

/// Render the report body
pub fn render_report(elements: &[ElementInfo]) -> String {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        "=".repeat(REPORT_TITLE.len()),
        String::new(),
        format!("Total Elements Detected: {}", elements.len()),
        String::new(),
        "Elements by Type:".to_string(),
    ];

    lines.extend(
        count_by_type(elements)
            .into_iter()
            .map(|(element_type, count)| format!("  {} ({})", element_type, count)),
    );
    lines.push(String::new());
    lines.push("Element Details:".to_string());

    for (index, element) in elements.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("{}. {}", index + 1, element.element_type));
        lines.push(format!(
            "   Position: ({}, {})",
            element.position.x, element.position.y
        ));
        lines.push(format!("   Size: {}x{}", element.size.width, element.size.height));
        lines.push(format!("   Confidence: {:.2}", element.confidence));
        lines.push(format!("   Selector: {}", element.selector));
        if !element.text.is_empty() {
            lines.push(format!("   Text: {}", element.text));
        }
    }

    let mut body = lines.join("\n");
    body.push('\n');
    body
}

/// Write the report into `output_dir` and return the file path
///
/// The body goes to a temporary sibling first and is persisted into place.
/// On any failure the temporary file is dropped, which deletes it, so no
/// truncated report is left behind.
pub fn generate_visual_report<P: AsRef<Path>>(
    elements: &[ElementInfo],
    output_dir: P,
) -> Result<PathBuf> {
    let _span = tracing::debug_span!("report").entered();

    let dir = output_dir.as_ref();
    let target = dir.join(REPORT_FILE_NAME);
    let write_error = |source: std::io::Error| {
        tracing::error!("Failed to write report to {}: {}", target.display(), source);
        DetectorError::ReportWrite {
            path: target.clone(),
            source,
        }
    };

    let mut staging = tempfile::Builder::new()
        .prefix(".visual_elements_report")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_error)?;

    staging
        .write_all(render_report(elements).as_bytes())
        .and_then(|()| staging.flush())
        .map_err(write_error)?;

    staging.persist(&target).map_err(|err| write_error(err.error))?;

    tracing::info!(
        "Wrote report for {} elements to {}",
        elements.len(),
        target.display()
    );

    Ok(target)
}
