//! Property tests for the linear quantile estimator and clipping

use proptest::prelude::*;
use roi_quantile::{clip_quantiles, quantile, SortedSample};

fn sample_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000.0f64..10_000.0, 1..200)
}

proptest! {
    #[test]
    fn prop_boundaries_are_min_and_max(data in sample_strategy()) {
        let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(quantile(&data, 0.0), min);
        prop_assert_eq!(quantile(&data, 1.0), max);
    }

    #[test]
    fn prop_monotone_in_probability(
        data in sample_strategy(),
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let (q1, q2) = if a <= b { (a, b) } else { (b, a) };
        let sorted = SortedSample::new(&data);
        let v1 = sorted.quantile(q1);
        let v2 = sorted.quantile(q2);
        // Interpolation rounding may cost at most an ulp-scale amount
        prop_assert!(v1 <= v2 + 1e-9 * v2.abs().max(1.0), "q({}) = {} > q({}) = {}", q1, v1, q2, v2);
    }

    #[test]
    fn prop_quantile_within_range(data in sample_strategy(), q in 0.0f64..=1.0) {
        let sorted = SortedSample::new(&data);
        let v = sorted.quantile(q);
        let lo = sorted.min().unwrap();
        let hi = sorted.max().unwrap();
        prop_assert!(v >= lo - 1e-9 * lo.abs().max(1.0));
        prop_assert!(v <= hi + 1e-9 * hi.abs().max(1.0));
    }

    #[test]
    fn prop_sorted_and_unsorted_agree(data in sample_strategy(), q in 0.0f64..=1.0) {
        prop_assert_eq!(quantile(&data, q), SortedSample::new(&data).quantile(q));
    }

    #[test]
    fn prop_reclip_with_noop_is_identity(data in sample_strategy()) {
        let once = clip_quantiles(&data, 0.01, 0.99).into_owned();
        let twice = clip_quantiles(&once, 0.0, 1.0);
        prop_assert_eq!(&*twice, once.as_slice());
    }

    #[test]
    fn prop_clip_keeps_subset_inside_band(data in sample_strategy()) {
        let sorted = SortedSample::new(&data);
        let l = sorted.quantile(0.01);
        let h = sorted.quantile(0.99);
        let clipped = clip_quantiles(&data, 0.01, 0.99);
        prop_assert!(clipped.len() <= data.len());
        prop_assert!(clipped.iter().all(|&v| v >= l && v <= h));

        // The borrowed run from the sorted sample holds the same values
        let mut owned = clipped.into_owned();
        owned.sort_by(|a, b| a.partial_cmp(b).unwrap());
        prop_assert_eq!(owned.as_slice(), sorted.clip(0.01, 0.99));
    }
}

#[test]
fn quantile_of_empty_is_zero_for_any_probability() {
    for q in [0.0, 0.01, 0.25, 0.5, 0.75, 0.99, 1.0] {
        assert_eq!(quantile(&[], q), 0.0);
    }
}

#[test]
fn quantile_of_random_sample_matches_order_statistics() {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(7);
    let data: Vec<f64> = (0..101).map(|_| rng.gen_range(-50.0..500.0)).collect();
    let sorted = SortedSample::new(&data);

    // With n = 101, q = k / 100 lands exactly on order statistic k
    for k in [0usize, 10, 25, 50, 75, 90, 100] {
        let q = k as f64 / 100.0;
        assert_eq!(sorted.quantile(q), sorted.as_slice()[k], "k = {k}");
    }
}
