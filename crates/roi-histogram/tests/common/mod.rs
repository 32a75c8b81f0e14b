//! Common test utilities for roi-histogram tests

#![allow(dead_code)]

use rand::prelude::*;
use rand_distr::{LogNormal, Normal};

/// ROI percentages from a log-normal revenue/budget ratio
///
/// Mirrors the catalog shape: most titles return between -80% and +300%
/// with a long right tail of breakout hits.
pub fn lognormal_roi(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let ratio = LogNormal::new(0.3, 1.1).unwrap();
    (0..n).map(|_| (ratio.sample(&mut rng) - 1.0) * 100.0).collect()
}

/// Roughly symmetric sample around `mean`
pub fn normal_sample(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

/// Sum of all bin counts
pub fn count_sum(hist: &roi_histogram::Histogram) -> usize {
    hist.counts().iter().sum()
}
