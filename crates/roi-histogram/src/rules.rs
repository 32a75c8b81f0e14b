//! Bin-width selection
//!
//! The width comes from the Freedman-Diaconis rule `h = 2 * IQR / n^(1/3)`.
//! When the interquartile range collapses (tiny or heavily tied samples)
//! Sturges' rule `k = ceil(1 + log2(n))` picks a bin count instead. Either
//! way the final count is clamped to [`BinLimits`] and the width is
//! recomputed so the bins tile `[min, max]` exactly.

use roi_core::{min_max, Error, Result};
use roi_quantile::iqr_sorted;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which rule produced the bin width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinRule {
    /// `2 * IQR / cbrt(n)`
    FreedmanDiaconis,
    /// `ceil(1 + log2(n))` bins over the range
    Sturges,
}

/// Inclusive bounds on the number of bins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinLimits {
    min_bins: usize,
    max_bins: usize,
}

impl BinLimits {
    /// Default lower bound on the bin count
    pub const DEFAULT_MIN_BINS: usize = 5;
    /// Default upper bound on the bin count; keeps charts readable
    pub const DEFAULT_MAX_BINS: usize = 60;

    /// Create validated limits (`1 <= min_bins <= max_bins`)
    pub fn new(min_bins: usize, max_bins: usize) -> Result<Self> {
        if min_bins == 0 {
            return Err(Error::InvalidParameter(
                "min_bins must be at least 1".to_string(),
            ));
        }
        if min_bins > max_bins {
            return Err(Error::InvalidParameter(format!(
                "min_bins ({min_bins}) exceeds max_bins ({max_bins})"
            )));
        }
        Ok(Self { min_bins, max_bins })
    }

    pub fn min_bins(&self) -> usize {
        self.min_bins
    }

    pub fn max_bins(&self) -> usize {
        self.max_bins
    }

    fn clamp(&self, bins: usize) -> usize {
        bins.clamp(self.min_bins, self.max_bins)
    }
}

impl Default for BinLimits {
    fn default() -> Self {
        Self {
            min_bins: Self::DEFAULT_MIN_BINS,
            max_bins: Self::DEFAULT_MAX_BINS,
        }
    }
}

/// Bin layout chosen for a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinSpec {
    /// Number of bins, within the configured limits
    pub bin_count: usize,
    /// Uniform bin width, `(max - min) / bin_count`
    pub width: f64,
    /// Left edge of the first bin
    pub min: f64,
    /// Right edge of the last bin
    pub max: f64,
    /// Rule that produced the pre-clamp width
    pub rule: BinRule,
}

/// Freedman-Diaconis width, or `None` when the IQR or sample size is zero
pub fn freedman_diaconis_width(iqr: f64, n: usize) -> Option<f64> {
    if n == 0 || iqr <= 0.0 {
        return None;
    }
    let width = 2.0 * iqr / (n as f64).cbrt();
    (width > 0.0 && width.is_finite()).then_some(width)
}

/// Sturges bin count `ceil(1 + log2(n))`, never below `floor`
///
/// For `n <= 1` the logarithm is skipped and `floor` is returned.
pub fn sturges_bin_count(n: usize, floor: usize) -> usize {
    if n <= 1 {
        return floor;
    }
    let bins = (1.0 + (n as f64).log2()).ceil() as usize;
    bins.max(floor)
}

/// Select bins for an (already clipped) sample with the default limits
pub fn select_bins(clipped: &[f64]) -> BinSpec {
    select_bins_with(clipped, BinLimits::default())
}

/// Select bins for an (already clipped) sample
///
/// Sorts a copy to compute the IQR; use [`select_bins_sorted`] when the
/// sample is already in ascending order.
pub fn select_bins_with(clipped: &[f64], limits: BinLimits) -> BinSpec {
    let mut sorted = clipped.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    select_bins_sorted(&sorted, limits)
}

/// Select bins for a sample sorted in ascending order
///
/// An empty sample is treated as the sentinel range `[0, 1]`. A zero-spread
/// range is widened to `[min, min + 1]`.
pub fn select_bins_sorted(sorted: &[f64], limits: BinLimits) -> BinSpec {
    let (min, mut max) = min_max(sorted).unwrap_or((0.0, 0.0));
    if max == min {
        max = min + 1.0;
    }
    let range = max - min;
    let n = sorted.len();

    let (width, rule) = match freedman_diaconis_width(iqr_sorted(sorted), n) {
        Some(width) => (width, BinRule::FreedmanDiaconis),
        None => {
            let bins = sturges_bin_count(n, limits.min_bins);
            (range / bins as f64, BinRule::Sturges)
        }
    };

    // Saturating cast: a vanishing width maps to usize::MAX before clamping
    let bin_count = limits.clamp((range / width).ceil() as usize);
    BinSpec {
        bin_count,
        width: range / bin_count as f64,
        min,
        max,
        rule,
    }
}
