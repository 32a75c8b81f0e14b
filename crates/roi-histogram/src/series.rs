//! Renderer-facing view of a histogram
//!
//! Flattens a [`Histogram`] into the series a bar-plus-density-line chart
//! needs. Nothing here draws or writes; the result is plain data that a
//! chart library (or JSON consumer) can take as-is.

use crate::types::Histogram;
use serde::Serialize;

/// One bar, positioned at its bin center on a numeric axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub center: f64,
    pub count: usize,
    pub start: f64,
    pub end: f64,
    /// Bin center at or right of the median
    pub above_median: bool,
}

/// A vertical reference line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub name: &'static str,
    pub x: f64,
}

/// Bar, density and marker series for one histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub bars: Vec<BarPoint>,
    /// `(center, density)` points for the overlay line
    pub density: Vec<(f64, f64)>,
    /// Tooltip labels, `"start – end"` with one decimal
    pub labels: Vec<String>,
    /// Median then mean
    pub markers: Vec<Marker>,
    pub total_count: usize,
    pub mean: f64,
    pub median: f64,
    pub width: f64,
}

impl ChartSeries {
    /// Build the series for `histogram`
    pub fn from_histogram(histogram: &Histogram) -> Self {
        let median = histogram.median();
        let bins = histogram.bins();

        let bars = bins
            .iter()
            .map(|bin| {
                let center = bin.center();
                BarPoint {
                    center,
                    count: bin.count,
                    start: bin.start,
                    end: bin.end,
                    above_median: center >= median,
                }
            })
            .collect();
        let density = bins.iter().map(|bin| (bin.center(), bin.density)).collect();
        let labels = bins
            .iter()
            .map(|bin| format!("{:.1} – {:.1}", bin.start, bin.end))
            .collect();

        Self {
            bars,
            density,
            labels,
            markers: vec![
                Marker {
                    name: "Median",
                    x: median,
                },
                Marker {
                    name: "Mean",
                    x: histogram.mean(),
                },
            ],
            total_count: histogram.total_count(),
            mean: histogram.mean(),
            median,
            width: histogram.width(),
        }
    }

    /// One-line chart subtitle with sample size, markers and bin layout
    pub fn subtitle(&self) -> String {
        format!(
            "n={} mean={:.2}% median={:.2}% bins={} width≈{:.2}",
            self.total_count,
            self.mean,
            self.median,
            self.bars.len(),
            self.width
        )
    }
}

impl From<&Histogram> for ChartSeries {
    fn from(histogram: &Histogram) -> Self {
        Self::from_histogram(histogram)
    }
}
