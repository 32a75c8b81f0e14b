//! ROI distribution statistics for movie catalog analytics
//!
//! Re-exports the workspace crates:
//!
//! - [`roi_core`]: error type and descriptive helpers
//! - [`roi_quantile`]: linear-interpolation quantiles and clipping
//! - [`roi_histogram`]: adaptive Freedman-Diaconis histograms, chart series
//!   and yearly counts
//!
//! ```rust
//! use roi_stats::prelude::*;
//!
//! let roi = vec![10.0, 12.0, 11.0, 50.0, 13.0, 9.0, 14.0, 11.5, 12.5, 100.0];
//! let histogram = roi_histogram(&roi);
//! let series = ChartSeries::from_histogram(&histogram);
//! println!("{}", series.subtitle());
//! ```

pub use roi_core;
pub use roi_histogram;
pub use roi_quantile;

pub use roi_core::{Error, Result};

/// Commonly used items
pub mod prelude {
    pub use roi_core::{mean, roi_percent, validate_finite, Error, Result};
    pub use roi_histogram::{
        roi_histogram, AdaptiveHistogramBuilder, BinRule, BinSpec, ChartSeries, Histogram,
        HistogramBin, HistogramConfig, YearlyCounts,
    };
    pub use roi_quantile::{clip_quantiles, quantile, ClipBounds, SortedSample};
}
