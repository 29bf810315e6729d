//! Rolling price history and the cheap/expensive/trend classification built
//! on top of it.
//!
//! Each instrument name gets its own bounded FIFO of recorded prices. The
//! analyzer never looks up prices itself: it is told what to record (trade
//! fills and per-round quotes) and is asked to judge a quote against what it
//! has seen.

use crate::models::AnalyzerConfig;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use trading::{Instrument, Result, TradingError};

/// Momentum of the most recent prices relative to the ones before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    Rising,
    Falling,
    Stable,
    /// Not enough history to compare two full windows.
    Unknown,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Rising => "RISING",
            Trend::Falling => "FALLING",
            Trend::Stable => "STABLE",
            Trend::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Default, Clone)]
pub struct HistoryAnalyzer {
    config: AnalyzerConfig,
    history: HashMap<String, VecDeque<f64>>,
}

impl HistoryAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            history: HashMap::new(),
        }
    }

    /// Appends the instrument's current price to its history, evicting the
    /// oldest entry once the configured capacity is exceeded.
    pub fn record_price(&mut self, instrument: &Instrument) -> Result<()> {
        let price = instrument.price();
        // Negated so NaN is rejected as well.
        if !(price > 0.0) {
            warn!(
                "Refusing to record price {} for '{}'",
                price,
                instrument.name()
            );
            return Err(TradingError::InvalidPrice {
                name: instrument.name().to_string(),
                price,
            });
        }

        let capacity = self.config.capacity();
        let prices = self
            .history
            .entry(instrument.name().to_string())
            .or_insert_with(|| VecDeque::with_capacity(capacity));
        prices.push_back(price);
        while prices.len() > capacity {
            prices.pop_front();
        }

        debug!(
            "Recorded {:.2} for '{}' ({} entries)",
            price,
            instrument.name(),
            prices.len()
        );
        Ok(())
    }

    /// Mean over the whole retained history; 0 when nothing was recorded.
    pub fn average_price(&self, name: &str) -> f64 {
        match self.history.get(name) {
            Some(prices) if !prices.is_empty() => mean(prices.iter().copied()),
            _ => 0.0,
        }
    }

    /// Percent distance of the current quote from the historical mean.
    /// Positive means above the mean. Returns 0 without history.
    pub fn deviation_percent(&self, instrument: &Instrument) -> f64 {
        let average = self.average_price(instrument.name());
        if average == 0.0 {
            return 0.0;
        }
        ((instrument.price() - average) / average) * 100.0
    }

    /// Strictly more than the cheap threshold below the mean.
    pub fn is_cheap(&self, instrument: &Instrument) -> bool {
        self.deviation_percent(instrument) < -self.config.cheap_threshold_pct()
    }

    /// Strictly more than the expensive threshold above the mean.
    pub fn is_expensive(&self, instrument: &Instrument) -> bool {
        self.deviation_percent(instrument) > self.config.expensive_threshold_pct()
    }

    /// Compares the mean of the latest window against the window before it.
    /// Only those `2 * window` entries are considered.
    pub fn trend(&self, name: &str) -> Trend {
        let window = self.config.trend_window();
        let prices = match self.history.get(name) {
            Some(prices) if prices.len() >= 2 * window => prices,
            _ => return Trend::Unknown,
        };

        let start = prices.len() - 2 * window;
        let prior = mean(prices.range(start..start + window).copied());
        let recent = mean(prices.range(start + window..).copied());

        let band = self.config.trend_band();
        if recent > prior * (1.0 + band) {
            Trend::Rising
        } else if recent < prior * (1.0 - band) {
            Trend::Falling
        } else {
            Trend::Stable
        }
    }

    /// Copy of the recorded prices, oldest first. Empty for unknown names.
    pub fn history(&self, name: &str) -> Vec<f64> {
        self.history
            .get(name)
            .map(|prices| prices.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn len(&self, name: &str) -> usize {
        self.history.get(name).map_or(0, |prices| prices.len())
    }

    pub fn tracked_instruments(&self) -> usize {
        self.history.len()
    }

    /// One line per tracked instrument: entry count and mean, sorted by name.
    pub fn summary(&self) -> Vec<String> {
        let mut names: Vec<&String> = self.history.keys().collect();
        names.sort();
        names
            .into_iter()
            .map(|name| {
                format!(
                    "{}: {} prices, mean {:.2}",
                    name,
                    self.len(name),
                    self.average_price(name)
                )
            })
            .collect()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests;
