use crate::classifier::{ScanGrid, SCAN_STEP, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::geometry::Size;

/// Per-detector settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Label attached to this detector's log span
    pub name: String,
    /// Hard gate on every detection entry point
    pub enabled: bool,
    pub window: Size,
    pub step: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            enabled: true,
            window: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            step: SCAN_STEP,
        }
    }
}

impl DetectorConfig {
    pub fn disabled() -> Self {
        Self::default().with_enabled(false)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_window(mut self, width: u32, height: u32) -> Self {
        self.window = Size::new(width, height);
        self
    }

    /// A step of zero is treated as one
    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    pub fn scan_grid(&self) -> ScanGrid {
        ScanGrid::new(self.window, self.step.max(1))
    }
}
