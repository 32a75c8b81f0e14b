//! End-to-end checks on realistic ROI samples

mod common;

use approx::assert_relative_eq;
use common::{count_sum, lognormal_roi, normal_sample};
use roi_core::{mean, roi_percent};
use roi_histogram::{
    build_histogram, roi_histogram, select_bins, AdaptiveHistogramBuilder, BinRule, ChartSeries,
    HistogramConfig,
};
use roi_quantile::{clip_quantiles, ClipBounds, SortedSample};

#[test]
fn heavy_tail_is_clipped_out_of_the_range() {
    let roi = lognormal_roi(5_000, 42);
    let hist = roi_histogram(&roi);
    let sorted = SortedSample::new(&roi);

    // The binned range stays inside the raw range and well below the max
    assert!(hist.min() >= sorted.min().unwrap());
    assert!(hist.max() <= sorted.quantile(0.99));
    assert!(hist.max() < sorted.max().unwrap());

    // Roughly 2% of samples sit outside the 1st-99th percentile band
    let excluded = hist.excluded_count();
    assert!(excluded > 0);
    assert!(excluded <= roi.len() / 25, "excluded {excluded}");
}

#[test]
fn large_sample_hits_bin_cap() {
    let roi = lognormal_roi(20_000, 7);
    let hist = roi_histogram(&roi);
    assert_eq!(hist.len(), 60);
}

#[test]
fn normal_sample_uses_freedman_diaconis() {
    let data = normal_sample(1_000, 25.0, 10.0, 3);
    let clipped = clip_quantiles(&data, 0.01, 0.99);
    let spec = select_bins(&clipped);

    assert_eq!(spec.rule, BinRule::FreedmanDiaconis);
    assert!((5..=60).contains(&spec.bin_count));
    assert_relative_eq!(spec.width * spec.bin_count as f64, spec.max - spec.min, max_relative = 1e-12);
}

#[test]
fn pipeline_matches_manual_composition() {
    let roi = lognormal_roi(500, 11);

    let clipped = clip_quantiles(&roi, 0.01, 0.99);
    let spec = select_bins(&clipped);
    let manual = build_histogram(&roi, spec.min, spec.max, spec.bin_count, spec.width);

    assert_eq!(roi_histogram(&roi), manual);
}

#[test]
fn densities_integrate_to_binned_fraction() {
    let roi = lognormal_roi(2_000, 5);
    let hist = roi_histogram(&roi);

    let area: f64 = hist.densities().iter().map(|d| d * hist.width()).sum();
    let fraction = count_sum(&hist) as f64 / roi.len() as f64;
    assert_relative_eq!(area, fraction, max_relative = 1e-9);

    let normalized = hist.normalize();
    let normalized_area: f64 = normalized.bins().iter().map(|b| b.density * b.width()).sum();
    assert_relative_eq!(normalized_area, 1.0, max_relative = 1e-9);
}

#[test]
fn roi_from_budget_and_revenue() {
    let movies = [
        (1_000_000.0, 4_000_000.0),
        (2_000_000.0, 1_000_000.0),
        (0.0, 3_000_000.0), // missing budget
        (5_000_000.0, 0.0), // missing revenue
        (3_000_000.0, 6_000_000.0),
    ];
    let roi: Vec<f64> = movies
        .iter()
        .filter_map(|&(budget, revenue)| roi_percent(budget, revenue))
        .collect();
    assert_eq!(roi.len(), 3);

    let hist = roi_histogram(&roi);
    assert_relative_eq!(hist.mean(), mean(&[300.0, -50.0, 100.0]), epsilon = 1e-9);
    assert_relative_eq!(hist.median(), 100.0, epsilon = 1e-9);
}

#[test]
fn series_follow_histogram_bins() {
    let roi = lognormal_roi(300, 9);
    let hist = roi_histogram(&roi);
    let series = ChartSeries::from_histogram(&hist);

    assert_eq!(series.bars.len(), hist.len());
    assert_eq!(series.density.len(), hist.len());
    assert_eq!(series.labels.len(), hist.len());
    for (bar, bin) in series.bars.iter().zip(hist.bins()) {
        assert_eq!(bar.count, bin.count);
        assert_eq!(bar.center, bin.center());
        assert_eq!(bar.above_median, bin.center() >= hist.median());
    }
    assert!(series.subtitle().starts_with("n=300 "));
}

#[test]
fn wider_clip_band_never_shrinks_range() {
    let roi = lognormal_roi(1_000, 21);
    let narrow = AdaptiveHistogramBuilder::new(
        HistogramConfig::default().with_clip(ClipBounds::new(0.1, 0.9).unwrap()),
    )
    .unwrap()
    .build(&roi);
    let wide = roi_histogram(&roi);

    assert!(wide.min() <= narrow.min());
    assert!(wide.max() >= narrow.max());
    assert!(narrow.excluded_count() >= wide.excluded_count());
}
