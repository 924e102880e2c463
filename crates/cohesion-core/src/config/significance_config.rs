//! Significance filter configuration.

use serde::{Deserialize, Serialize};

/// Configuration for conditional-frequency filtering of co-occurrence pairs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SignificanceConfig {
    /// Minimum diagonal count for a field to be considered. Default: 2.
    pub min_count: Option<u32>,
    /// Conditional frequency a pair must exceed to be kept. Default: 0.5.
    pub threshold: Option<f64>,
}

impl SignificanceConfig {
    /// Returns the effective minimum count, defaulting to 2.
    pub fn effective_min_count(&self) -> u32 {
        self.min_count.unwrap_or(2)
    }

    /// Returns the effective threshold, defaulting to 0.5.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(0.5)
    }
}
