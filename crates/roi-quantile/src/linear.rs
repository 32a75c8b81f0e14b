//! Linear-interpolation quantile estimator
//!
//! Implements the Hyndman-Fan type 7 definition (the default in R and
//! numpy): for probability `q` over `n` sorted values the position is
//! `q * (n - 1)` and the result interpolates linearly between the two
//! neighbouring order statistics.

use std::cmp::Ordering;

/// Sort a copy of the sample in ascending order
pub(crate) fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Quantile of an unsorted sample
///
/// Sorts a private copy; the caller's slice is never reordered. An empty
/// sample yields `0.0`. This is a sentinel chosen so the function stays
/// total, not a statistically meaningful value.
///
/// `q <= 0` returns the minimum and `q >= 1` the maximum. Probabilities are
/// not validated; passing a `q` outside `[0, 1]` or NaN is the caller's
/// responsibility.
///
/// Callers that need several quantiles of the same data should build a
/// [`SortedSample`] once instead.
pub fn quantile(samples: &[f64], q: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    quantile_sorted(&sorted_copy(samples), q)
}

/// Quantile of a sample that is already sorted ascending
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if q <= 0.0 {
        return sorted[0];
    }
    if q >= 1.0 {
        return sorted[n - 1];
    }

    let pos = q * (n - 1) as f64;
    let i = pos.floor() as usize;
    let frac = pos - i as f64;
    if i + 1 < n {
        sorted[i] + (sorted[i + 1] - sorted[i]) * frac
    } else {
        sorted[i]
    }
}

/// A sorted copy of a sample, for answering many quantile queries with a
/// single sort
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortedSample {
    values: Vec<f64>,
}

impl SortedSample {
    /// Sort a copy of `samples`
    pub fn new(samples: &[f64]) -> Self {
        Self {
            values: sorted_copy(samples),
        }
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the sample is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The sorted values
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Smallest value
    pub fn min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Largest value
    pub fn max(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Linear-interpolation quantile (see [`quantile`])
    pub fn quantile(&self, q: f64) -> f64 {
        quantile_sorted(&self.values, q)
    }

    /// Several quantiles at once, in the order requested
    pub fn quantiles(&self, probabilities: &[f64]) -> Vec<f64> {
        probabilities.iter().map(|&q| self.quantile(q)).collect()
    }

    /// The 0.5 quantile
    pub fn median(&self) -> f64 {
        self.quantile(0.5)
    }

    /// Interquartile range `Q3 - Q1`
    pub fn iqr(&self) -> f64 {
        iqr_sorted(&self.values)
    }

    /// Values `v` with `quantile(lo) <= v <= quantile(hi)`
    ///
    /// Because the data is sorted the kept values form a contiguous run, so
    /// this borrows instead of copying. The result is itself sorted.
    pub fn clip(&self, lo: f64, hi: f64) -> &[f64] {
        if lo <= 0.0 && hi >= 1.0 {
            return &self.values;
        }
        let l = self.quantile(lo);
        let h = self.quantile(hi);
        let start = self.values.partition_point(|&v| v < l);
        let end = self.values.partition_point(|&v| v <= h);
        if start >= end {
            return &[];
        }
        &self.values[start..end]
    }
}

impl From<Vec<f64>> for SortedSample {
    fn from(mut values: Vec<f64>) -> Self {
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        Self { values }
    }
}

/// Interquartile range of a sample that is already sorted ascending
pub fn iqr_sorted(sorted: &[f64]) -> f64 {
    quantile_sorted(sorted, 0.75) - quantile_sorted(sorted, 0.25)
}
