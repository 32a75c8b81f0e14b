//! Assigning samples to a chosen bin layout

use crate::rules::BinSpec;
use crate::types::{Histogram, HistogramBin};
use roi_core::mean;
use roi_quantile::SortedSample;

/// Bin `original` into `bin_count` bins of `width` starting at `min`
///
/// The arguments are expected to come from
/// [`select_bins`](crate::select_bins): `bin_count >= 1`, `width > 0` and
/// `min + bin_count * width ≈ max`.
///
/// - Bin `i` spans `[min + i * width, min + (i + 1) * width)`. The last bin
///   ends at `max` exactly and is closed, so a sample equal to `max` is
///   counted even when rounding would put it one index past the end.
/// - Samples outside `[min, max]` are skipped for binning but still
///   contribute to `mean`, `median` and `total_count`.
/// - `density = count / (total_count * width)` where `total_count` is the
///   full input size, not the number of binned samples. Densities therefore
///   integrate to the binned fraction; see [`Histogram::normalize`] for a
///   proper probability density.
pub fn build_histogram(
    original: &[f64],
    min: f64,
    max: f64,
    bin_count: usize,
    width: f64,
) -> Histogram {
    let sorted = SortedSample::new(original);
    bin_with_sorted(original, &sorted, min, max, bin_count, width)
}

/// [`build_histogram`] with a [`BinSpec`] and a pre-sorted copy of the input
pub(crate) fn build_from_spec(original: &[f64], sorted: &SortedSample, spec: &BinSpec) -> Histogram {
    bin_with_sorted(original, sorted, spec.min, spec.max, spec.bin_count, spec.width)
}

fn bin_with_sorted(
    original: &[f64],
    sorted: &SortedSample,
    min: f64,
    max: f64,
    bin_count: usize,
    width: f64,
) -> Histogram {
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| {
            let start = min + i as f64 * width;
            let end = if i == bin_count - 1 {
                max
            } else {
                min + (i + 1) as f64 * width
            };
            HistogramBin::new(start, end, 0, 0.0)
        })
        .collect();

    if let Some(last) = bin_count.checked_sub(1) {
        for &value in original {
            if value < min || value > max {
                continue;
            }
            let idx = ((value - min) / width) as usize;
            bins[idx.min(last)].count += 1;
        }
    }

    let total = original.len();
    let scale = total as f64 * width;
    if scale > 0.0 {
        for bin in &mut bins {
            bin.density = bin.count as f64 / scale;
        }
    }

    Histogram::new(bins, total, min, max, width, mean(original), sorted.median())
}
