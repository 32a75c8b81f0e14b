//! Quantile-band clipping
//!
//! Drops samples outside `[quantile(lo), quantile(hi)]` so that a handful of
//! extreme values cannot dominate a range-based estimate such as a bin width.

use crate::linear::SortedSample;
use roi_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::trace;

/// Lower and upper clip probabilities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClipBounds {
    /// Lower quantile probability
    pub lo: f64,
    /// Upper quantile probability
    pub hi: f64,
}

impl ClipBounds {
    /// Default lower bound (1st percentile)
    pub const DEFAULT_LO: f64 = 0.01;
    /// Default upper bound (99th percentile)
    pub const DEFAULT_HI: f64 = 0.99;

    /// Create validated clip bounds
    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        let bounds = Self { lo, hi };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Bounds that keep every sample
    pub fn none() -> Self {
        Self { lo: 0.0, hi: 1.0 }
    }

    /// Whether these bounds keep every sample
    pub fn is_noop(&self) -> bool {
        self.lo <= 0.0 && self.hi >= 1.0
    }

    /// Check `0 <= lo <= hi <= 1`
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.lo) {
            return Err(Error::invalid_probability("lo", self.lo));
        }
        if !(0.0..=1.0).contains(&self.hi) {
            return Err(Error::invalid_probability("hi", self.hi));
        }
        if self.lo > self.hi {
            return Err(Error::InvalidParameter(format!(
                "clip bounds out of order: lo = {} > hi = {}",
                self.lo, self.hi
            )));
        }
        Ok(())
    }

    /// Clip `samples` with these bounds (see [`clip_quantiles`])
    pub fn apply<'a>(&self, samples: &'a [f64]) -> Cow<'a, [f64]> {
        clip_quantiles(samples, self.lo, self.hi)
    }
}

impl Default for ClipBounds {
    fn default() -> Self {
        Self {
            lo: Self::DEFAULT_LO,
            hi: Self::DEFAULT_HI,
        }
    }
}

/// Keep the samples `v` with `quantile(lo) <= v <= quantile(hi)`
///
/// When `lo <= 0` and `hi >= 1` the input is returned as-is without
/// copying. Otherwise the kept samples are copied out in their original
/// relative order. The input is never mutated.
pub fn clip_quantiles(samples: &[f64], lo: f64, hi: f64) -> Cow<'_, [f64]> {
    if lo <= 0.0 && hi >= 1.0 {
        return Cow::Borrowed(samples);
    }

    let sorted = SortedSample::new(samples);
    let l = sorted.quantile(lo);
    let h = sorted.quantile(hi);
    let kept: Vec<f64> = samples
        .iter()
        .copied()
        .filter(|&v| v >= l && v <= h)
        .collect();

    trace!(
        lo,
        hi,
        lower = l,
        upper = h,
        kept = kept.len(),
        dropped = samples.len() - kept.len(),
        "clipped sample to quantile band"
    );
    Cow::Owned(kept)
}
