//! Configuration for building a store and its initial view

use crate::session::BinLimits;
use explorer_core::{Error, Result};
use explorer_histogram::SortedSampleStore;
use explorer_sampling::MixtureSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Initial view and slider bounds for an interactive session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// `(v_min, v_max)` shown at startup
    pub initial_range: (f64, f64),
    /// Outer limits the range may be moved within
    pub range_bounds: (f64, f64),
    /// Bin count shown at startup, clamped into `bin_limits`
    pub initial_bins: usize,
    /// Lowest and highest selectable bin count
    pub bin_limits: BinLimits,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_range: (-50.0, 150.0),
            range_bounds: (-150.0, 150.0),
            initial_bins: 100,
            bin_limits: BinLimits::default(),
        }
    }
}

impl ViewConfig {
    /// Check bounds for consistency
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = self.range_bounds;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(Error::invalid_parameters(format!(
                "range bounds must be finite with min < max, got [{lo}, {hi}]"
            )));
        }
        let (v_min, v_max) = self.initial_range;
        if !(v_min.is_finite() && v_max.is_finite()) {
            return Err(Error::invalid_parameters("initial range must be finite"));
        }
        if self.initial_bins == 0 {
            return Err(Error::invalid_parameters("initial bin count must be positive"));
        }
        self.bin_limits.validate()
    }
}

/// Everything needed to build a sample store and open a session on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Total number of samples (N)
    pub sample_count: usize,
    /// Mixture to sample from
    pub mixture: MixtureSpec,
    /// Seed for reproducible samples; random when absent
    pub seed: Option<u64>,
    /// Initial view
    pub view: ViewConfig,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            sample_count: 50_000_000,
            mixture: MixtureSpec::default(),
            seed: None,
            view: ViewConfig::default(),
        }
    }
}

impl ExplorerConfig {
    /// Default configuration with a different sample count
    pub fn with_sample_count(sample_count: usize) -> Self {
        Self {
            sample_count,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::invalid_parameters(format!("configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!(path = %path.display(), n = config.sample_count, "loaded configuration");
        Ok(config)
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(Error::invalid_parameters("sample count must be positive"));
        }
        self.view.validate()
    }

    /// Generate and sort the configured samples
    pub fn build_store(&self) -> Result<SortedSampleStore> {
        self.validate()?;
        SortedSampleStore::from_mixture(self.sample_count, &self.mixture, self.seed)
    }
}
