//! Configuration for adaptive histogram construction

use crate::rules::BinLimits;
use roi_core::Result;
use roi_quantile::ClipBounds;
use serde::{Deserialize, Serialize};

/// Settings for [`AdaptiveHistogramBuilder`](crate::AdaptiveHistogramBuilder)
///
/// Every field has a default, so a partial JSON document such as
/// `{"max_bins": 40}` deserializes to the defaults plus that override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistogramConfig {
    /// Quantile band used to estimate the bin width and binned range
    pub clip: ClipBounds,
    /// Fewest bins the histogram may have
    pub min_bins: usize,
    /// Most bins the histogram may have
    pub max_bins: usize,
}

impl HistogramConfig {
    /// Replace the clip bounds
    pub fn with_clip(mut self, clip: ClipBounds) -> Self {
        self.clip = clip;
        self
    }

    /// Replace the bin-count limits
    pub fn with_bin_limits(mut self, min_bins: usize, max_bins: usize) -> Self {
        self.min_bins = min_bins;
        self.max_bins = max_bins;
        self
    }

    /// Validated bin-count limits
    pub fn limits(&self) -> Result<BinLimits> {
        BinLimits::new(self.min_bins, self.max_bins)
    }

    /// Check clip bounds and bin limits
    pub fn validate(&self) -> Result<()> {
        self.clip.validate()?;
        self.limits()?;
        Ok(())
    }
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            clip: ClipBounds::default(),
            min_bins: BinLimits::DEFAULT_MIN_BINS,
            max_bins: BinLimits::DEFAULT_MAX_BINS,
        }
    }
}
