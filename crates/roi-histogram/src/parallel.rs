//! Building histograms for several independent samples
//!
//! Each build is pure, so separate metrics can be binned concurrently. With
//! the `parallel` feature the work fans out over the rayon thread pool;
//! otherwise it runs sequentially with identical results.

use crate::builder::AdaptiveHistogramBuilder;
use crate::types::Histogram;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl AdaptiveHistogramBuilder {
    /// Build one histogram per sample, in input order
    pub fn build_many<S>(&self, samples: &[S]) -> Vec<Histogram>
    where
        S: AsRef<[f64]> + Sync,
    {
        #[cfg(feature = "parallel")]
        let iter = samples.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = samples.iter();

        iter.map(|s| self.build(s.as_ref())).collect()
    }
}
