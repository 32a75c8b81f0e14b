//! Adaptive histogram builder
//!
//! Runs the full pipeline: sort once, clip to the configured quantile band,
//! pick a bin layout from the clipped values, then bin the full input into
//! that layout.

use crate::binner::build_from_spec;
use crate::config::HistogramConfig;
use crate::rules::{select_bins_sorted, BinLimits, BinSpec};
use crate::types::Histogram;
use roi_core::Result;
use roi_quantile::SortedSample;
use tracing::{debug, instrument, warn};

/// Builds outlier-robust histograms with a data-driven bin width
///
/// # Examples
///
/// ```rust
/// use roi_histogram::AdaptiveHistogramBuilder;
///
/// let roi = vec![10.0, 12.0, 11.0, 50.0, 13.0, 9.0, 14.0, 11.5, 12.5, 100.0];
/// let histogram = AdaptiveHistogramBuilder::default().build(&roi);
///
/// assert!((5..=60).contains(&histogram.len()));
/// assert_eq!(histogram.total_count(), 10);
/// assert_eq!(histogram.binned_count(), 8); // 9.0 and 100.0 are clipped out
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdaptiveHistogramBuilder {
    config: HistogramConfig,
    limits: BinLimits,
}

impl AdaptiveHistogramBuilder {
    /// Create a builder from a configuration, validating it first
    pub fn new(config: HistogramConfig) -> Result<Self> {
        config.validate()?;
        let limits = config.limits()?;
        Ok(Self { config, limits })
    }

    /// The configuration in use
    pub fn config(&self) -> &HistogramConfig {
        &self.config
    }

    /// Choose the bin layout for `samples` without binning them
    pub fn select(&self, samples: &[f64]) -> BinSpec {
        self.select_sorted(&SortedSample::new(samples))
    }

    /// Build the histogram
    ///
    /// Never fails: an empty sample yields five zero-count bins over
    /// `[0, 1]` (or `min_bins` bins when configured) with mean and median
    /// of `0.0`.
    #[instrument(level = "debug", skip_all, fields(n = samples.len()))]
    pub fn build(&self, samples: &[f64]) -> Histogram {
        let sorted = SortedSample::new(samples);
        let spec = self.select_sorted(&sorted);
        let histogram = build_from_spec(samples, &sorted, &spec);
        debug!(
            binned = histogram.binned_count(),
            excluded = histogram.excluded_count(),
            mean = histogram.mean(),
            median = histogram.median(),
            "histogram built"
        );
        histogram
    }

    fn select_sorted(&self, sorted: &SortedSample) -> BinSpec {
        let clip = self.config.clip;
        let mut clipped = sorted.clip(clip.lo, clip.hi);
        if clipped.is_empty() && !sorted.is_empty() {
            // Interpolated bounds can fall strictly between two samples
            warn!(
                n = sorted.len(),
                lo = clip.lo,
                hi = clip.hi,
                "clip bounds kept no samples; using full range"
            );
            clipped = sorted.as_slice();
        }
        debug!(
            kept = clipped.len(),
            dropped = sorted.len() - clipped.len(),
            "clipped to quantile band"
        );

        let spec = select_bins_sorted(clipped, self.limits);
        debug!(
            rule = ?spec.rule,
            bins = spec.bin_count,
            width = spec.width,
            min = spec.min,
            max = spec.max,
            "selected bin layout"
        );
        spec
    }
}
