use serde::{Deserialize, Serialize};

fn default_capacity() -> usize {
    100
}

fn default_threshold_pct() -> f64 {
    5.0
}

fn default_trend_window() -> usize {
    5
}

fn default_trend_band() -> f64 {
    0.02
}

/// Tuning of the price history analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum prices kept per instrument (oldest evicted first).
    #[serde(default = "default_capacity")]
    capacity: usize,
    /// Percent below the mean a quote must be to count as cheap.
    #[serde(default = "default_threshold_pct")]
    cheap_threshold_pct: f64,
    /// Percent above the mean a quote must be to count as expensive.
    #[serde(default = "default_threshold_pct")]
    expensive_threshold_pct: f64,
    /// Size of each of the two trend windows.
    #[serde(default = "default_trend_window")]
    trend_window: usize,
    /// Relative move between the windows that counts as a trend (0.02 = 2%).
    #[serde(default = "default_trend_band")]
    trend_band: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            cheap_threshold_pct: default_threshold_pct(),
            expensive_threshold_pct: default_threshold_pct(),
            trend_window: default_trend_window(),
            trend_band: default_trend_band(),
        }
    }
}

impl AnalyzerConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn with_thresholds(mut self, cheap_pct: f64, expensive_pct: f64) -> Self {
        self.cheap_threshold_pct = cheap_pct;
        self.expensive_threshold_pct = expensive_pct;
        self
    }

    pub fn with_trend(mut self, window: usize, band: f64) -> Self {
        self.trend_window = window.max(1);
        self.trend_band = band;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity.max(1)
    }

    pub fn cheap_threshold_pct(&self) -> f64 {
        self.cheap_threshold_pct
    }

    pub fn expensive_threshold_pct(&self) -> f64 {
        self.expensive_threshold_pct
    }

    pub fn trend_window(&self) -> usize {
        self.trend_window.max(1)
    }

    pub fn trend_band(&self) -> f64 {
        self.trend_band
    }
}
