//! Core types for histogram representation

use serde::Serialize;
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub start: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub end: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Density (count / (total_count * bin_width))
    pub density: f64,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(start: f64, end: f64, count: usize, density: f64) -> Self {
        Self {
            start,
            end,
            count,
            density,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        self.start + (self.end - self.start) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Check if a value falls within this bin, treating it as half-open
    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value < self.end
    }

    /// Get the relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.start, self.end, self.count, self.density
        )
    }
}

/// A binned sample plus the summary markers drawn over it
///
/// Bins tile `[min, max]` in ascending order. `total_count`, `mean` and
/// `median` always describe the full input, including samples that fell
/// outside the binned range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    min: f64,
    max: f64,
    width: f64,
    mean: f64,
    median: f64,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(
        bins: Vec<HistogramBin>,
        total_count: usize,
        min: f64,
        max: f64,
        width: f64,
        mean: f64,
        median: f64,
    ) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
            width,
            mean,
            median,
        }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Number of samples in the input, binned or not
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of samples that landed in a bin
    pub fn binned_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Number of samples outside `[min, max]`
    pub fn excluded_count(&self) -> usize {
        self.total_count - self.binned_count()
    }

    /// Left edge of the first bin
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Right edge of the last bin
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the range of the histogram
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// The uniform bin width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Arithmetic mean of the full input
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Median of the full input
    pub fn median(&self) -> f64 {
        self.median
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Get the maximum density in the histogram
    pub fn max_density(&self) -> f64 {
        self.bins.iter().map(|bin| bin.density).fold(0.0, f64::max)
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        // Last bin includes its right edge
        if let Some(last) = self.bins.last() {
            if value == last.end {
                return Some(self.bins.len() - 1);
            }
        }

        self.bins.iter().position(|bin| bin.contains(value))
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get densities as a vector
    pub fn densities(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.density).collect()
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.center()).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let Some(last) = self.bins.last() else {
            return vec![];
        };

        let mut edges = Vec::with_capacity(self.bins.len() + 1);
        edges.extend(self.bins.iter().map(|bin| bin.start));
        edges.push(last.end);
        edges
    }

    /// Create a copy whose densities integrate to 1 over the bins
    ///
    /// Stored densities divide by the full input size, so they integrate
    /// to the binned fraction only. This rescales them to a proper
    /// probability density over the binned samples.
    pub fn normalize(&self) -> Self {
        let mut normalized = self.clone();
        let total_density: f64 = self.bins.iter().map(|bin| bin.density * bin.width()).sum();

        if total_density > 0.0 {
            for bin in &mut normalized.bins {
                bin.density /= total_density;
            }
        }

        normalized
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}], mean={:.3}, median={:.3})",
            self.len(),
            self.total_count,
            self.min,
            self.max,
            self.mean,
            self.median
        )
    }
}
