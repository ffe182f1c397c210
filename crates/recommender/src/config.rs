//! Tunable parameters of a recommendation run.

use analyzers::DEFAULT_WINDOW_SIZE;
use pipeline::DEFAULT_PRIMARY_SIZE;

/// Pipeline settings. The defaults reproduce the standard daily run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Most recent same-weekday draws analyzed (default: 800)
    pub window_size: usize,
    /// Size of the primary set (default: 5)
    pub primary_size: usize,
    /// Above `baseline * hot_ratio` a number is hot (default: 1.2)
    pub hot_ratio: f64,
    /// Below `baseline * cold_ratio` a number is cold (default: 0.6)
    pub cold_ratio: f64,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            primary_size: DEFAULT_PRIMARY_SIZE,
            hot_ratio: 1.2,
            cold_ratio: 0.6,
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_primary_size(mut self, primary_size: usize) -> Self {
        self.primary_size = primary_size;
        self
    }

    pub fn with_bands(mut self, hot_ratio: f64, cold_ratio: f64) -> Self {
        self.hot_ratio = hot_ratio;
        self.cold_ratio = cold_ratio;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}
