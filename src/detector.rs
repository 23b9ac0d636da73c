use crate::classifier::{classify, default_heuristics, ScanInput};
use crate::config::DetectorConfig;
use crate::error::{DetectorError, Result};
use crate::preprocess::{load_image, to_grayscale, PixelBuffer};
use crate::report;
use crate::types::ElementInfo;
use std::path::{Path, PathBuf};
use tracing::Span;

/// Heuristic visual element detector
///
/// Holds only its configuration and its log span. Calls share no mutable
/// state, so one detector can serve several threads at once.
#[derive(Debug, Clone)]
pub struct Detector {
    config: DetectorConfig,
    span: Span,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

impl Detector {
    pub fn new(config: DetectorConfig) -> Self {
        let span = tracing::info_span!("detector", name = %config.name);
        Self { config, span }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    fn ensure_enabled(&self) -> Result<()> {
        if self.config.enabled {
            Ok(())
        } else {
            tracing::error!("Detection requested while detector is disabled");
            Err(DetectorError::Disabled)
        }
    }

    /// Load a screenshot and detect candidate elements in it
    ///
    /// Results come back grouped by pass: buttons, text fields, images, links.
    /// An image without matches yields an empty vector.
    pub fn detect_elements<P: AsRef<Path>>(&self, path: P) -> Result<Vec<ElementInfo>> {
        let _enter = self.span.enter();
        self.ensure_enabled()?;

        let path = path.as_ref();
        tracing::info!("Detecting visual elements in {}", path.display());

        let pixels = load_image(path)?;
        Ok(self.run_passes(&pixels, Some(path)))
    }

    /// Same as [`detect_elements`](Self::detect_elements) for an already decoded buffer
    ///
    /// `source` only feeds the derived `src` attribute of image elements.
    pub fn detect_image(
        &self,
        pixels: &PixelBuffer,
        source: Option<&Path>,
    ) -> Result<Vec<ElementInfo>> {
        let _enter = self.span.enter();
        self.ensure_enabled()?;

        Ok(self.run_passes(pixels, source))
    }

    fn run_passes(&self, pixels: &PixelBuffer, source: Option<&Path>) -> Vec<ElementInfo> {
        let intensity = to_grayscale(pixels);
        let input = ScanInput {
            intensity: &intensity,
            pixels,
            source,
        };

        let elements = classify(&input, self.config.scan_grid(), &default_heuristics());

        tracing::info!(
            "Detected {} elements in {}x{} image",
            elements.len(),
            intensity.width(),
            intensity.height()
        );

        elements
    }

    /// Write the plain-text summary report into `output_dir`
    pub fn generate_visual_report<P: AsRef<Path>>(
        &self,
        elements: &[ElementInfo],
        output_dir: P,
    ) -> Result<PathBuf> {
        let _enter = self.span.enter();
        report::generate_visual_report(elements, output_dir)
    }
}
