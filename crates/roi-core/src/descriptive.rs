//! Descriptive helpers shared by the quantile and histogram crates

use crate::error::{Error, Result};
use statrs::statistics::Statistics;

/// Arithmetic mean, or `0.0` for an empty sample
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.mean()
}

/// Minimum and maximum in a single pass
///
/// Returns `None` for an empty sample.
pub fn min_max(samples: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = samples.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    }))
}

/// Check that every sample is finite
///
/// The binning pipeline assumes finite input; callers that receive data
/// from an untrusted source can run this first.
pub fn validate_finite(samples: &[f64]) -> Result<()> {
    match samples.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFinite {
            index,
            value: samples[index],
        }),
        None => Ok(()),
    }
}

/// Return on investment as a percentage: `(revenue / budget - 1) * 100`
///
/// Only defined for positive budget and revenue, matching the filter the
/// catalog query applies before handing samples to the histogram.
pub fn roi_percent(budget: f64, revenue: f64) -> Option<f64> {
    if budget > 0.0 && revenue > 0.0 {
        Some((revenue / budget - 1.0) * 100.0)
    } else {
        None
    }
}
