//! Adaptive histograms for return-on-investment distributions
//!
//! ROI percentages are heavy-tailed: a few titles return thousands of
//! percent while most sit near zero. A fixed bin count over the raw range
//! puts nearly everything into one bar. This crate builds histograms whose
//! range and bin width come from the bulk of the data:
//!
//! 1. Clip to a quantile band (1st-99th percentile by default).
//! 2. Pick a width with the Freedman-Diaconis rule, falling back to
//!    Sturges' rule when the IQR is zero, and clamp to 5-60 bins.
//! 3. Bin every original sample that falls in the clipped range.
//! 4. Report mean and median over all samples, clipped or not.
//!
//! # Examples
//!
//! ## Default pipeline
//!
//! ```rust
//! use roi_histogram::roi_histogram;
//!
//! let roi = vec![10.0, 12.0, 11.0, 50.0, 13.0, 9.0, 14.0, 11.5, 12.5, 100.0];
//! let histogram = roi_histogram(&roi);
//!
//! for bin in histogram.bins() {
//!     println!("  [{:.1}, {:.1}): count={}, density={:.3}",
//!              bin.start, bin.end, bin.count, bin.density);
//! }
//! assert_eq!(histogram.median(), 12.25);
//! ```
//!
//! ## Custom configuration and chart series
//!
//! ```rust
//! use roi_histogram::{AdaptiveHistogramBuilder, ChartSeries, HistogramConfig};
//! use roi_quantile::ClipBounds;
//!
//! let config = HistogramConfig::default()
//!     .with_clip(ClipBounds::new(0.05, 0.95)?)
//!     .with_bin_limits(5, 30);
//! let builder = AdaptiveHistogramBuilder::new(config)?;
//!
//! let roi: Vec<f64> = (0..200).map(|i| (i as f64).powf(1.3) - 40.0).collect();
//! let histogram = builder.build(&roi);
//! let series = ChartSeries::from_histogram(&histogram);
//!
//! assert_eq!(series.bars.len(), histogram.len());
//! println!("{}", series.subtitle());
//! # Ok::<(), roi_core::Error>(())
//! ```

pub mod binner;
pub mod builder;
pub mod config;
pub mod parallel;
pub mod rules;
pub mod series;
pub mod types;
pub mod yearly;

// Re-export main types
pub use binner::build_histogram;
pub use builder::AdaptiveHistogramBuilder;
pub use config::HistogramConfig;
pub use rules::{
    freedman_diaconis_width, select_bins, select_bins_sorted, select_bins_with,
    sturges_bin_count, BinLimits, BinRule, BinSpec,
};
pub use series::{BarPoint, ChartSeries, Marker};
pub use types::{Histogram, HistogramBin};
pub use yearly::{YearCount, YearlyCounts};

pub use roi_core::{Error, Result};

/// Build a histogram with the default configuration
///
/// 1st/99th percentile clip and 5 to 60 bins.
pub fn roi_histogram(samples: &[f64]) -> Histogram {
    AdaptiveHistogramBuilder::default().build(samples)
}
