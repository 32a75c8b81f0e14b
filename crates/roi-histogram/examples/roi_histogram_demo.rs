//! Builds an ROI histogram from synthetic catalog data and prints the
//! series a chart renderer would consume
//!
//! Run with `RUST_LOG=roi_histogram=debug` to see the clip and bin-width
//! decisions.

use rand::prelude::*;
use rand_distr::LogNormal;
use roi_core::roi_percent;
use roi_histogram::{AdaptiveHistogramBuilder, ChartSeries, HistogramConfig, YearlyCounts};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Synthetic catalog: budget plus a log-normal revenue multiple
    let mut rng = StdRng::seed_from_u64(2024);
    let multiple = LogNormal::new(0.3, 1.1)?;
    let movies: Vec<(i32, f64, f64)> = (0..2_000)
        .map(|_| {
            let year = rng.gen_range(1980..=2020);
            let budget = rng.gen_range(1.0e6..2.0e8);
            (year, budget, budget * multiple.sample(&mut rng))
        })
        .collect();

    let roi: Vec<f64> = movies
        .iter()
        .filter_map(|&(_, budget, revenue)| roi_percent(budget, revenue))
        .collect();

    let builder = AdaptiveHistogramBuilder::new(HistogramConfig::default())?;
    let histogram = builder.build(&roi);
    let series = ChartSeries::from_histogram(&histogram);

    println!("=== ROI% Histogram ===");
    println!("{}", series.subtitle());
    for (bar, label) in series.bars.iter().zip(&series.labels) {
        let marker = if bar.above_median { '#' } else { '=' };
        let width = bar.count * 60 / histogram.max_count().max(1);
        println!("{label:>18} | {:<60} {}", marker.to_string().repeat(width), bar.count);
    }
    println!(
        "{} of {} titles outside the binned range",
        histogram.excluded_count(),
        histogram.total_count()
    );

    println!("\n=== Movies Released per Year ===");
    let yearly = YearlyCounts::from_rows(movies.iter().map(|&(year, _, _)| (year, 1)))?;
    println!("{}", yearly.subtitle());
    for entry in yearly.iter() {
        println!("{} | {}", entry.year, entry.count);
    }

    Ok(())
}
